use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::group::Group;

pub struct UserGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a group. Returns `false` when the pair already
    /// exists, leaving the single stored row untouched.
    ///
    /// The check-then-insert window is closed by the unique index on
    /// `(user_id, group_id)`; a concurrent duplicate insert surfaces as a
    /// unique violation, which callers treat the same as "already linked".
    pub async fn add(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        if self.exists(user_id, group_id).await? {
            return Ok(false);
        }

        entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn exists(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Unlinks a user from a group. Returns the number of rows removed,
    /// zero when the pair was not linked.
    pub async fn remove(&self, user_id: i32, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists the groups a user belongs to.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Group>, DbErr> {
        let rows = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Group)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, group)| group.map(Group::from_entity))
            .collect())
    }

    /// Removes every membership of a group, ahead of deleting the group
    /// itself.
    pub async fn delete_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every membership of a user, ahead of deleting the user
    /// itself.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
