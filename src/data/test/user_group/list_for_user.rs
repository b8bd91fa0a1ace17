use super::*;

/// Tests listing the groups of a user with memberships.
///
/// Expected: Ok with the linked group's name present
#[tokio::test]
async fn lists_joined_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group, _) = create_user_in_group(db).await?;

    let groups = UserGroupRepository::new(db).list_for_user(user.id).await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, group.id);
    assert_eq!(groups[0].name, group.name);

    Ok(())
}

/// Tests listing for a user with no memberships.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn lists_empty_for_unassigned_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let groups = UserGroupRepository::new(db).list_for_user(user.id).await?;

    assert!(groups.is_empty());

    Ok(())
}

/// Tests that another user's memberships do not leak into the listing.
///
/// Expected: Ok with only the caller's groups
#[tokio::test]
async fn ignores_other_users_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _) = create_user_in_group(db).await?;
    let outsider = create_user(db).await?;

    let groups = UserGroupRepository::new(db).list_for_user(outsider.id).await?;

    assert!(groups.is_empty());

    Ok(())
}
