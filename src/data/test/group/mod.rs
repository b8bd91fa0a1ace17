use crate::data::group::GroupRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod get_all;
