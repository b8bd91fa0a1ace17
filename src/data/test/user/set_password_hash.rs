use super::*;

/// Tests replacing a stored password hash.
///
/// Expected: Ok(true) and the stored hash equals the new one
#[tokio::test]
async fn replaces_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_password_hash(user.id, "$argon2id$replacement")
        .await?;

    assert!(updated);
    assert_eq!(
        repo.find_by_id(user.id).await?.unwrap().password_hash,
        "$argon2id$replacement"
    );

    Ok(())
}

/// Tests replacing the hash for a user id that does not exist.
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

    let updated = UserRepository::new(db)
        .set_password_hash(9999, "$argon2id$replacement")
        .await?;

    assert!(!updated);

    Ok(())
}
