use super::*;

/// Tests linking a user to a group.
///
/// Expected: Ok(true) and the pair exists afterwards
#[tokio::test]
async fn links_user_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let group = create_group(db).await?;

    let repo = UserGroupRepository::new(db);
    let inserted = repo.add(user.id, group.id).await?;

    assert!(inserted);
    assert!(repo.exists(user.id, group.id).await?);

    Ok(())
}

/// Tests linking an already-linked pair.
///
/// Verifies that the second call is a no-op leaving a single row.
///
/// Expected: Ok(false) on the repeat, one membership stored
#[tokio::test]
async fn repeated_add_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group, _) = create_user_in_group(db).await?;

    let repo = UserGroupRepository::new(db);
    let inserted = repo.add(user.id, group.id).await?;

    assert!(!inserted);

    let groups = repo.list_for_user(user.id).await?;
    assert_eq!(groups.len(), 1);

    Ok(())
}

/// Tests that one user may belong to several groups.
///
/// Expected: Ok with both memberships stored
#[tokio::test]
async fn user_joins_multiple_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let first = create_group(db).await?;
    let second = create_group(db).await?;

    let repo = UserGroupRepository::new(db);
    repo.add(user.id, first.id).await?;
    repo.add(user.id, second.id).await?;

    let groups = repo.list_for_user(user.id).await?;
    assert_eq!(groups.len(), 2);

    Ok(())
}
