use super::*;

/// Tests inserting a validated client.
///
/// Verifies that the repository stores all fields and assigns an id.
///
/// Expected: Ok with a persisted client carrying the given fields
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    let client = repo
        .create(NewClient {
            name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            birth_day: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            age: 36,
            telephone: "1234567".to_string(),
        })
        .await?;

    assert!(client.id > 0);
    assert_eq!(client.name, "John");
    assert_eq!(client.email, "john.doe@example.com");
    assert_eq!(client.birth_day, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());

    Ok(())
}

/// Tests that the email unique constraint rejects duplicates.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    let new_client = NewClient {
        name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "dup@example.com".to_string(),
        birth_day: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        age: 36,
        telephone: "1234567".to_string(),
    };

    repo.create(new_client.clone()).await?;
    let result = repo.create(new_client).await;

    assert!(result.is_err());

    Ok(())
}
