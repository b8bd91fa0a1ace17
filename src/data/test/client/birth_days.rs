use super::*;

/// Tests fetching only the birth date column.
///
/// Expected: Ok with one date per stored client
#[tokio::test]
async fn returns_all_birth_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::client::create_client_born_in(db, 1980).await?;
    test_utils::factory::client::create_client_born_in(db, 1995).await?;

    let mut birth_days = ClientRepository::new(db).birth_days().await?;
    birth_days.sort();

    assert_eq!(
        birth_days,
        vec![
            NaiveDate::from_ymd_opt(1980, 6, 15).unwrap(),
            NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
        ]
    );

    Ok(())
}

/// Tests fetching birth dates with no clients stored.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let birth_days = ClientRepository::new(db).birth_days().await?;

    assert!(birth_days.is_empty());

    Ok(())
}
