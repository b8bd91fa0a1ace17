pub mod client;
pub mod group;
pub mod user;
pub mod user_group;

#[cfg(test)]
mod test;
