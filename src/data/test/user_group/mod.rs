use crate::data::user_group::UserGroupRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{group::create_group, helpers::create_user_in_group, user::create_user},
};

mod add;
mod delete_by_group;
mod delete_by_user;
mod list_for_user;
mod remove;
