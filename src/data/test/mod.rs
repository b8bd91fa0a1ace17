mod client;
mod group;
mod user;
mod user_group;
