use super::*;

/// Tests unlinking a linked pair.
///
/// Expected: Ok(1) and the pair no longer exists
#[tokio::test]
async fn unlinks_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group, _) = create_user_in_group(db).await?;

    let repo = UserGroupRepository::new(db);
    let removed = repo.remove(user.id, group.id).await?;

    assert_eq!(removed, 1);
    assert!(!repo.exists(user.id, group.id).await?);

    Ok(())
}

/// Tests unlinking a pair that was never linked.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn removing_absent_pair_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let group = create_group(db).await?;

    let removed = UserGroupRepository::new(db).remove(user.id, group.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
