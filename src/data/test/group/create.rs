use super::*;

/// Tests inserting a group.
///
/// Expected: Ok with the stored name and description
#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupRepository::new(db)
        .create("Admins".to_string(), "Administrative staff".to_string())
        .await?;

    assert!(group.id > 0);
    assert_eq!(group.name, "Admins");
    assert_eq!(group.description, "Administrative staff");

    Ok(())
}

/// Tests that two groups may share a name.
///
/// Group names carry no unique constraint; duplicates are legal.
///
/// Expected: Ok for both inserts with distinct ids
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    let first = repo.create("Staff".to_string(), String::new()).await?;
    let second = repo.create("Staff".to_string(), String::new()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
