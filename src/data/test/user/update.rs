use super::*;

/// Tests a partial profile update.
///
/// Verifies that username, hash, and enabled state survive the update
/// untouched.
///
/// Expected: Ok(Some) with only the email changed
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.password_hash, user.password_hash);
    assert!(updated.enabled);

    Ok(())
}

/// Tests updating a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(
            9999,
            UpdateUserParam {
                email: Some("ghost@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
