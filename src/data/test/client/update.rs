use super::*;

/// Tests a partial update that changes one field.
///
/// Verifies that fields left as `None` keep their stored values.
///
/// Expected: Ok(Some) with only the telephone changed
#[tokio::test]
async fn updates_single_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::client::create_client(db).await?;

    let updated = ClientRepository::new(db)
        .update(
            created.id,
            UpdateClientParam {
                telephone: Some("7654321".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.telephone, "7654321");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.age, created.age);

    Ok(())
}

/// Tests an update where every field is `None`.
///
/// Expected: Ok(Some) with the record unchanged, no error
#[tokio::test]
async fn empty_patch_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::client::create_client(db).await?;

    let updated = ClientRepository::new(db)
        .update(created.id, UpdateClientParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.telephone, created.telephone);

    Ok(())
}

/// Tests updating a client id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ClientRepository::new(db)
        .update(
            9999,
            UpdateClientParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
