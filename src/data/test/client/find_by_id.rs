use super::*;

/// Tests fetching an existing client by id.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::client::create_client(db).await?;

    let found = ClientRepository::new(db).find_by_id(created.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, created.email);

    Ok(())
}

/// Tests fetching a client id that does not exist.
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

    let found = ClientRepository::new(db).find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
