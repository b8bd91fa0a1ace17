use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::user::{CreateUserParam, UpdateUserParam, User};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account. The account starts enabled with no recorded
    /// login.
    pub async fn create(&self, params: CreateUserParam) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            enabled: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find().all(self.db).await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial profile update. Returns `None` when no user with
    /// `id` exists.
    pub async fn update(&self, id: i32, params: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let updated = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            username: ActiveValue::Unchanged(existing.username),
            email: ActiveValue::Set(params.email.unwrap_or(existing.email)),
            password_hash: ActiveValue::Unchanged(existing.password_hash),
            first_name: ActiveValue::Set(params.first_name.unwrap_or(existing.first_name)),
            last_name: ActiveValue::Set(params.last_name.unwrap_or(existing.last_name)),
            enabled: ActiveValue::Unchanged(existing.enabled),
            last_login: ActiveValue::Unchanged(existing.last_login),
        }
        .update(self.db)
        .await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Flips the enabled flag. Returns `false` when no row matched.
    pub async fn set_enabled(&self, id: i32, enabled: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Enabled,
                sea_orm::sea_query::Expr::value(enabled),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the stored password hash. Returns `false` when no row
    /// matched.
    pub async fn set_password_hash(&self, id: i32, password_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records the moment of a successful login.
    pub async fn update_last_login(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(at),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user row. Memberships are the caller's responsibility;
    /// see `MembershipService::delete_user`.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
