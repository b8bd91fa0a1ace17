use super::*;

/// Tests removing every membership of a user.
///
/// Expected: Ok with all rows for the user gone, other users untouched
#[tokio::test]
async fn removes_all_user_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other_user = create_user(db).await?;
    let first = create_group(db).await?;
    let second = create_group(db).await?;

    let repo = UserGroupRepository::new(db);
    repo.add(user.id, first.id).await?;
    repo.add(user.id, second.id).await?;
    repo.add(other_user.id, first.id).await?;

    let removed = repo.delete_by_user(user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.list_for_user(user.id).await?.is_empty());
    assert!(repo.exists(other_user.id, first.id).await?);

    Ok(())
}
