use super::*;

/// Tests listing all groups.
///
/// Expected: Ok with one entry per stored group
#[tokio::test]
async fn lists_all_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::group::create_group(db).await?;
    test_utils::factory::group::create_group(db).await?;

    let groups = GroupRepository::new(db).get_all().await?;

    assert_eq!(groups.len(), 2);

    Ok(())
}
