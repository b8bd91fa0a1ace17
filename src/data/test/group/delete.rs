use super::*;

/// Tests deleting an existing group.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = test_utils::factory::group::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let deleted = repo.delete(group.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(group.id).await?.is_none());

    Ok(())
}

/// Tests deleting a group id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GroupRepository::new(db).delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
