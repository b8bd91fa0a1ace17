use super::*;
use chrono::Utc;

/// Tests stamping the login time.
///
/// Expected: Ok(true) and `last_login` is set
#[tokio::test]
async fn records_login_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::create_user(db).await?;
    assert!(user.last_login.is_none());

    let repo = UserRepository::new(db);
    let now = Utc::now();
    let updated = repo.update_last_login(user.id, now).await?;

    assert!(updated);
    assert!(repo.find_by_id(user.id).await?.unwrap().last_login.is_some());

    Ok(())
}
