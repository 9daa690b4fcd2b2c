use crate::data::engagement::EngagementRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod comment_reactions;
mod like_video;
mod liked_videos;
