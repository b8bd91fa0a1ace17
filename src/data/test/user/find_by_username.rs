use super::*;

/// Tests fetching a user by their username.
///
/// Expected: Ok(Some) with the matching account
#[tokio::test]
async fn finds_existing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_username("bob").await?;

    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests fetching a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
