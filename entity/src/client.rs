use sea_orm::entity::prelude::*;

/// Client record with contact details and declared age.
///
/// `email` is unique at the storage layer. `age` is validated against
/// `birth_day` at intake time; it is a point-in-time assertion, not a value
/// the database keeps in sync.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub birth_day: Date,
    pub age: i32,
    pub telephone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
