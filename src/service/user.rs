use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{user::UserRepository, user_group::UserGroupRepository},
    error::AppError,
    model::{
        group::Group,
        user::{CreateUserParam, UpdateUserParam, User},
    },
    service::membership::MembershipService,
    util::password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account from a plaintext password.
    ///
    /// The password is hashed before anything touches storage; a duplicate
    /// username maps to 409.
    pub async fn create_user(
        &self,
        username: String,
        email: String,
        password: &str,
        first_name: String,
        last_name: String,
    ) -> Result<User, AppError> {
        let password_hash = password::hash_password(password)?;

        UserRepository::new(self.db)
            .create(CreateUserParam {
                username,
                email,
                password_hash,
                first_name,
                last_name,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict {
                    field: "username",
                },
                _ => AppError::DbErr(err),
            })
    }

    /// Fetches a user together with their group memberships.
    pub async fn get_user(&self, id: i32) -> Result<(User, Vec<Group>), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "User", id })?;

        let groups = UserGroupRepository::new(self.db).list_for_user(id).await?;

        Ok((user, groups))
    }

    pub async fn get_all_users(&self) -> Result<Vec<(User, Vec<Group>)>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        let membership_repo = UserGroupRepository::new(self.db);

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let groups = membership_repo.list_for_user(user.id).await?;
            result.push((user, groups));
        }

        Ok(result)
    }

    pub async fn update_user(&self, id: i32, params: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(AppError::NotFound { entity: "User", id })
    }

    pub async fn set_enabled(&self, id: i32, enabled: bool) -> Result<(), AppError> {
        let updated = UserRepository::new(self.db).set_enabled(id, enabled).await?;

        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound { entity: "User", id })
        }
    }

    /// Replaces a user's password with a freshly hashed one.
    pub async fn reset_password(&self, id: i32, new_password: &str) -> Result<(), AppError> {
        let password_hash = password::hash_password(new_password)?;

        let updated = UserRepository::new(self.db)
            .set_password_hash(id, &password_hash)
            .await?;

        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound { entity: "User", id })
        }
    }

    /// Deletes a user and their memberships atomically.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        MembershipService::new(self.db).delete_user(id).await
    }
}
