use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect,
};

use crate::model::client::{Client, NewClient, UpdateClientParam};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated client and returns the stored record.
    pub async fn create(&self, new_client: NewClient) -> Result<Client, DbErr> {
        let client = entity::client::ActiveModel {
            name: ActiveValue::Set(new_client.name),
            last_name: ActiveValue::Set(new_client.last_name),
            email: ActiveValue::Set(new_client.email),
            birth_day: ActiveValue::Set(new_client.birth_day),
            age: ActiveValue::Set(new_client.age),
            telephone: ActiveValue::Set(new_client.telephone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(client))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let client = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(client.map(Client::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, DbErr> {
        let clients = entity::prelude::Client::find().all(self.db).await?;

        Ok(clients.into_iter().map(Client::from_entity).collect())
    }

    /// Applies a partial update to a client.
    ///
    /// Returns `None` when no client with `id` exists. Every column is
    /// written back with the merged value so an all-`None` patch is still a
    /// valid (no-op) update.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateClientParam,
    ) -> Result<Option<Client>, DbErr> {
        let Some(existing) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let updated = entity::client::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(params.name.unwrap_or(existing.name)),
            last_name: ActiveValue::Set(params.last_name.unwrap_or(existing.last_name)),
            email: ActiveValue::Set(params.email.unwrap_or(existing.email)),
            birth_day: ActiveValue::Set(params.birth_day.unwrap_or(existing.birth_day)),
            age: ActiveValue::Set(params.age.unwrap_or(existing.age)),
            telephone: ActiveValue::Set(params.telephone.unwrap_or(existing.telephone)),
        }
        .update(self.db)
        .await?;

        Ok(Some(Client::from_entity(updated)))
    }

    /// Deletes a client. Returns `false` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Fetches only the birth dates of all clients, for KPI aggregation.
    pub async fn birth_days(&self) -> Result<Vec<NaiveDate>, DbErr> {
        entity::prelude::Client::find()
            .select_only()
            .column(entity::client::Column::BirthDay)
            .into_tuple::<NaiveDate>()
            .all(self.db)
            .await
    }
}
