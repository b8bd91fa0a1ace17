pub use super::client::Entity as Client;
pub use super::group::Entity as Group;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
