//! Client factory for creating test client entities.
//!
//! Provides factory methods for creating client records with sensible defaults.
//! The default birth date is placed exactly 30 years before today so the
//! declared age of 30 passes the intake consistency check.

use crate::factory::helpers::next_id;
use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .email("test@test.com")
///     .age(25)
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    last_name: String,
    email: String,
    birth_day: NaiveDate,
    age: i32,
    telephone: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"`, last_name: `"Test"`
    /// - email: `"client{id}@example.com"` (unique per factory call)
    /// - birth_day: today's date 30 years ago, age: `30`
    /// - telephone: `"1234567"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        // Feb 29 has no counterpart 30 years back in a non-leap year.
        let birth_day = today
            .with_year(today.year() - 30)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - 30, 3, 1).unwrap());

        Self {
            db,
            name: format!("Client {}", id),
            last_name: "Test".to_string(),
            email: format!("client{}@example.com", id),
            birth_day,
            age: 30,
            telephone: "1234567".to_string(),
        }
    }

    /// Sets the first name for the client.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the last name for the client.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address for the client.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the birth date for the client.
    pub fn birth_day(mut self, birth_day: NaiveDate) -> Self {
        self.birth_day = birth_day;
        self
    }

    /// Sets the declared age for the client.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the telephone number for the client.
    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            birth_day: ActiveValue::Set(self.birth_day),
            age: ActiveValue::Set(self.age),
            telephone: ActiveValue::Set(self.telephone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}

/// Creates a client born in the given year on June 15.
///
/// Useful for KPI tests that need specific birth years. The declared age is
/// set to the plain calendar-year difference.
///
/// # Arguments
/// - `db` - Database connection
/// - `birth_year` - Year of birth
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_client_born_in(
    db: &DatabaseConnection,
    birth_year: i32,
) -> Result<entity::client::Model, DbErr> {
    let birth_day = NaiveDate::from_ymd_opt(birth_year, 6, 15).unwrap();
    let age = Utc::now().date_naive().year() - birth_year;

    ClientFactory::new(db).birth_day(birth_day).age(age).build().await
}
