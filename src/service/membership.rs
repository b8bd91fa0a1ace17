use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};

use crate::{
    data::{group::GroupRepository, user::UserRepository, user_group::UserGroupRepository},
    error::AppError,
    model::group::Group,
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a user to a group.
    ///
    /// Both sides must exist; a missing one fails with 404 naming which.
    /// Linking an already-linked pair is a no-op, so the call is safe to
    /// retry.
    pub async fn assign_group(&self, user_id: i32, group_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "Group",
                id: group_id,
            })?;

        UserGroupRepository::new(self.db)
            .add(user_id, group_id)
            .await?;

        Ok(())
    }

    /// Unlinks a user from a group.
    ///
    /// Both sides must exist. Removing a pair that is not linked is a
    /// no-op, mirroring `assign_group`.
    pub async fn remove_assignment(&self, user_id: i32, group_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "Group",
                id: group_id,
            })?;

        UserGroupRepository::new(self.db)
            .remove(user_id, group_id)
            .await?;

        Ok(())
    }

    /// Lists the groups a user belongs to. The user must exist.
    pub async fn groups_for_user(&self, user_id: i32) -> Result<Vec<Group>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        Ok(UserGroupRepository::new(self.db)
            .list_for_user(user_id)
            .await?)
    }

    /// Deletes a group together with all of its memberships.
    ///
    /// Runs in a transaction so a group row never outlives its memberships
    /// or vice versa.
    pub async fn delete_group(&self, group_id: i32) -> Result<(), AppError> {
        self.db
            .transaction::<_, (), AppError>(|txn| {
                Box::pin(async move {
                    UserGroupRepository::new(txn).delete_by_group(group_id).await?;

                    let deleted = GroupRepository::new(txn).delete(group_id).await?;
                    if !deleted {
                        return Err(AppError::NotFound {
                            entity: "Group",
                            id: group_id,
                        });
                    }

                    Ok(())
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }

    /// Deletes a user together with all of their memberships, atomically.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        self.db
            .transaction::<_, (), AppError>(|txn| {
                Box::pin(async move {
                    UserGroupRepository::new(txn).delete_by_user(user_id).await?;

                    let deleted = UserRepository::new(txn).delete(user_id).await?;
                    if !deleted {
                        return Err(AppError::NotFound {
                            entity: "User",
                            id: user_id,
                        });
                    }

                    Ok(())
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }
}

fn flatten_transaction_error(err: TransactionError<AppError>) -> AppError {
    match err {
        TransactionError::Connection(db_err) => AppError::DbErr(db_err),
        TransactionError::Transaction(app_err) => app_err,
    }
}
