use crate::data::subscription::SubscriptionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod subscribed_by;
