use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::client::ClientRepository,
    error::{validation::ValidationError, AppError},
    model::client::{Client, CreateClientParam, NewClient, UpdateClientParam},
    util::validate,
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
    validate_on_update: bool,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection, validate_on_update: bool) -> Self {
        Self {
            db,
            validate_on_update,
        }
    }

    /// Validates and stores a new client.
    ///
    /// Checks run in a fixed order and stop at the first failure: required
    /// fields, email format, phone format, age consistency. An empty
    /// telephone fails the phone check like any other short value.
    pub async fn create_client(&self, param: CreateClientParam) -> Result<Client, AppError> {
        let new_client = validate_intake(param)?;

        ClientRepository::new(self.db)
            .create(new_client)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict { field: "email" },
                _ => AppError::DbErr(err),
            })
    }

    pub async fn get_client(&self, id: i32) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "Client",
                id,
            })
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update to a client.
    ///
    /// When revalidation is enabled, the merged record is run through the
    /// same pipeline as intake, so a patch cannot leave a client in a state
    /// that creation would have rejected. With it disabled (the default) a
    /// patch is applied as-is.
    pub async fn update_client(
        &self,
        id: i32,
        params: UpdateClientParam,
    ) -> Result<Client, AppError> {
        let repository = ClientRepository::new(self.db);

        if self.validate_on_update {
            let existing = repository.find_by_id(id).await?.ok_or(AppError::NotFound {
                entity: "Client",
                id,
            })?;

            let merged = CreateClientParam {
                name: params.name.clone().unwrap_or(existing.name),
                last_name: params.last_name.clone().unwrap_or(existing.last_name),
                email: params.email.clone().unwrap_or(existing.email),
                birth_day: Some(params.birth_day.unwrap_or(existing.birth_day)),
                age: params.age.unwrap_or(existing.age),
                telephone: params.telephone.clone().unwrap_or(existing.telephone),
            };
            validate_intake(merged)?;
        }

        let updated = repository
            .update(id, params)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict { field: "email" },
                _ => AppError::DbErr(err),
            })?;

        updated.ok_or(AppError::NotFound {
            entity: "Client",
            id,
        })
    }

    pub async fn delete_client(&self, id: i32) -> Result<(), AppError> {
        let deleted = ClientRepository::new(self.db).delete(id).await?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound {
                entity: "Client",
                id,
            })
        }
    }
}

/// Runs the intake validation pipeline and converts a passing intake into a
/// persistable record.
fn validate_intake(param: CreateClientParam) -> Result<NewClient, ValidationError> {
    let Some(birth_day) = param.birth_day else {
        return Err(ValidationError::MissingFields);
    };
    if param.name.is_empty()
        || param.last_name.is_empty()
        || param.email.is_empty()
        || param.age == 0
    {
        return Err(ValidationError::MissingFields);
    }

    if !validate::valid_email(&param.email) {
        return Err(ValidationError::Email);
    }

    if !validate::valid_phone(&param.telephone) {
        return Err(ValidationError::Phone);
    }

    let today = Utc::now().date_naive();
    if !validate::age_matches_birth_date(birth_day, param.age, today) {
        return Err(ValidationError::Age);
    }

    Ok(NewClient {
        name: param.name,
        last_name: param.last_name,
        email: param.email,
        birth_day,
        age: param.age,
        telephone: param.telephone,
    })
}
