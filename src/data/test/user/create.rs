use super::*;

/// Tests inserting a new account.
///
/// Verifies that the account starts enabled with no recorded login.
///
/// Expected: Ok with an enabled user and `last_login` unset
#[tokio::test]
async fn creates_enabled_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: test_utils::factory::user::DUMMY_PASSWORD_HASH.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert!(user.enabled);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that the username unique constraint rejects duplicates.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let param = CreateUserParam {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: test_utils::factory::user::DUMMY_PASSWORD_HASH.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
