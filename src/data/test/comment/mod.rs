use crate::{
    data::comment::CommentRepository,
    model::comment::CreateCommentParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
