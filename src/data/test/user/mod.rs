use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_username;
mod set_enabled;
mod set_password_hash;
mod update;
mod update_last_login;
