use crate::{
    data::user::UserRepository,
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_ids;
mod list_other_than;
