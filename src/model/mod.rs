pub mod api;
pub mod client;
pub mod group;
pub mod kpi;
pub mod user;
