//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a group, and an association between them.
///
/// Convenience method for membership tests that need an already-assigned
/// pair. All entities are created with default values; use the individual
/// factories if you need to customize them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group, membership))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_in_group(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::group::Model,
        entity::user_group::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db).await?;

    let membership = entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        group_id: ActiveValue::Set(group.id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((user, group, membership))
}
