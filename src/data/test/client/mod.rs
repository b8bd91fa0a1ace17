use crate::{
    data::client::ClientRepository,
    model::client::{NewClient, UpdateClientParam},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod birth_days;
mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
