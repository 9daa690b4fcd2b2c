use crate::{
    data::video::VideoRepository,
    model::video::CreateVideoParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_detail;
mod find_with_owner;
mod list_details;
mod search;
