use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::group::Group;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, description: String) -> Result<Group, DbErr> {
        let group = entity::group::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(group))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let group = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(group.map(Group::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find().all(self.db).await?;

        Ok(groups.into_iter().map(Group::from_entity).collect())
    }

    /// Deletes a group row. Memberships are the caller's responsibility;
    /// see `MembershipService::delete_group`.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
