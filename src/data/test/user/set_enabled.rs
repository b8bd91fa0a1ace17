use super::*;

/// Tests disabling an account.
///
/// Expected: Ok(true) and the stored flag flips to false
#[tokio::test]
async fn disables_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_enabled(user.id, false).await?;

    assert!(updated);
    assert!(!repo.find_by_id(user.id).await?.unwrap().enabled);

    Ok(())
}

/// Tests re-enabling a disabled account.
///
/// Expected: Ok(true) and the stored flag flips back to true
#[tokio::test]
async fn enables_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::UserFactory::new(db)
        .enabled(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_enabled(user.id, true).await?;

    assert!(updated);
    assert!(repo.find_by_id(user.id).await?.unwrap().enabled);

    Ok(())
}

/// Tests flipping the flag for a user id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).set_enabled(9999, false).await?;

    assert!(!updated);

    Ok(())
}
