use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored client record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: NaiveDate,
    pub age: i32,
    pub telephone: String,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            email: entity.email,
            birth_day: entity.birth_day,
            age: entity.age,
            telephone: entity.telephone,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            birth_day: self.birth_day,
            age: self.age,
            telephone: self.telephone,
        }
    }
}

/// Client intake as received from the API, before validation.
///
/// Every field is optional at this stage; the validation pipeline decides
/// which absences are fatal. A passing intake converts into [`NewClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClientParam {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: Option<NaiveDate>,
    pub age: i32,
    pub telephone: String,
}

/// A client that passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: NaiveDate,
    pub age: i32,
    pub telephone: String,
}

/// Partial update for a client; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateClientParam {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_day: Option<NaiveDate>,
    pub age: Option<i32>,
    pub telephone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: NaiveDate,
    pub age: i32,
    pub telephone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClientDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub birth_day: Option<NaiveDate>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub telephone: String,
}

impl CreateClientDto {
    pub fn into_param(self) -> CreateClientParam {
        CreateClientParam {
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            birth_day: self.birth_day,
            age: self.age,
            telephone: self.telephone,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateClientDto {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_day: Option<NaiveDate>,
    pub age: Option<i32>,
    pub telephone: Option<String>,
}

impl UpdateClientDto {
    pub fn into_param(self) -> UpdateClientParam {
        UpdateClientParam {
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            birth_day: self.birth_day,
            age: self.age,
            telephone: self.telephone,
        }
    }
}
