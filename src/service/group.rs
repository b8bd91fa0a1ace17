use sea_orm::DatabaseConnection;

use crate::{
    data::group::GroupRepository,
    error::{validation::ValidationError, AppError},
    model::group::Group,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group. The name is required; the description may be empty.
    pub async fn create_group(
        &self,
        name: String,
        description: String,
    ) -> Result<Group, AppError> {
        if name.is_empty() {
            return Err(ValidationError::MissingGroupName.into());
        }

        Ok(GroupRepository::new(self.db)
            .create(name, description)
            .await?)
    }

    pub async fn get_group(&self, id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Group", id })
    }

    pub async fn get_all_groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }
}
