use super::*;

/// Tests removing every membership of a group.
///
/// Expected: Ok with all rows for the group gone, other groups untouched
#[tokio::test]
async fn removes_all_group_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = create_group(db).await?;
    let other_group = create_group(db).await?;
    let first = create_user(db).await?;
    let second = create_user(db).await?;

    let repo = UserGroupRepository::new(db);
    repo.add(first.id, group.id).await?;
    repo.add(second.id, group.id).await?;
    repo.add(first.id, other_group.id).await?;

    let removed = repo.delete_by_group(group.id).await?;

    assert_eq!(removed, 2);
    assert!(!repo.exists(first.id, group.id).await?);
    assert!(!repo.exists(second.id, group.id).await?);
    assert!(repo.exists(first.id, other_group.id).await?);

    Ok(())
}
