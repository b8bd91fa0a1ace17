use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::{client::ClientRepository, group::GroupRepository, user::UserRepository},
    error::AppError,
    model::{client::NewClient, user::CreateUserParam},
    util::password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending migrations so the schema is
/// up-to-date before the application touches it.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions live in a dedicated table in the same Sqlite file; the store
/// creates it on first use. Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Session store migration failed: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds default accounts, groups, and sample clients into an empty
/// database.
///
/// Runs only when no users exist, so restarts never duplicate rows and
/// never overwrite changed passwords. The sample clients mirror a fresh
/// install's demo data: declared age zero and no telephone, which the
/// intake pipeline would reject but stored rows tolerate.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    use chrono::NaiveDate;

    if entity::prelude::User::find().count(db).await? > 0 {
        return Ok(());
    }

    tracing::info!("Empty database, seeding default accounts and sample data");

    let group_repo = GroupRepository::new(db);
    group_repo
        .create("Admin".to_string(), "Administrators".to_string())
        .await?;
    group_repo
        .create("User".to_string(), "Regular users".to_string())
        .await?;

    let user_repo = UserRepository::new(db);
    user_repo
        .create(CreateUserParam {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: password::hash_password("admin")?,
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
        })
        .await?;
    user_repo
        .create(CreateUserParam {
            username: "user".to_string(),
            email: "user@example.com".to_string(),
            password_hash: password::hash_password("user")?,
            first_name: "Regular".to_string(),
            last_name: "User".to_string(),
        })
        .await?;

    let client_repo = ClientRepository::new(db);
    let samples = [
        ("John", "Doe", "john.doe@example.com", (1985, 5, 15)),
        ("Jane", "Smith", "jane.smith@example.com", (1990, 6, 20)),
        ("Alice", "Johnson", "alice.johnson@example.com", (1978, 12, 5)),
    ];
    for (name, last_name, email, (year, month, day)) in samples {
        let Some(birth_day) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        client_repo
            .create(NewClient {
                name: name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                birth_day,
                age: 0,
                telephone: String::new(),
            })
            .await?;
    }

    Ok(())
}
