use super::*;

/// Tests listing all stored clients.
///
/// Expected: Ok with one entry per stored client
#[tokio::test]
async fn lists_all_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::client::create_client(db).await?;
    test_utils::factory::client::create_client(db).await?;
    test_utils::factory::client::create_client(db).await?;

    let clients = ClientRepository::new(db).get_all().await?;

    assert_eq!(clients.len(), 3);

    Ok(())
}

/// Tests listing with no clients stored.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn lists_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clients = ClientRepository::new(db).get_all().await?;

    assert!(clients.is_empty());

    Ok(())
}
