use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password,
};

/// Username/password authentication against stored accounts.
///
/// Session handling stays in the controller layer; this service only decides
/// whether a login attempt is valid and records the login time.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a login attempt and returns the authenticated user.
    ///
    /// Unknown usernames and wrong passwords fail identically. A disabled
    /// account is refused even with the correct password. On success the
    /// user's `last_login` is stamped with the current time.
    pub async fn login(&self, username: &str, plaintext: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(plaintext, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.enabled {
            return Err(AuthError::Disabled.into());
        }

        user_repo.update_last_login(user.id, Utc::now()).await?;

        Ok(user)
    }
}
