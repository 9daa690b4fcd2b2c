pub use sea_orm_migration::prelude::*;

mod m20260824_000001_create_user_table;
mod m20260824_000002_create_video_table;
mod m20260824_000003_create_comment_table;
mod m20260824_000004_create_video_like_table;
mod m20260824_000005_create_video_dislike_table;
mod m20260824_000006_create_comment_like_table;
mod m20260824_000007_create_comment_dislike_table;
mod m20260824_000008_create_watch_later_table;
mod m20260824_000009_create_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260824_000001_create_user_table::Migration),
            Box::new(m20260824_000002_create_video_table::Migration),
            Box::new(m20260824_000003_create_comment_table::Migration),
            Box::new(m20260824_000004_create_video_like_table::Migration),
            Box::new(m20260824_000005_create_video_dislike_table::Migration),
            Box::new(m20260824_000006_create_comment_like_table::Migration),
            Box::new(m20260824_000007_create_comment_dislike_table::Migration),
            Box::new(m20260824_000008_create_watch_later_table::Migration),
            Box::new(m20260824_000009_create_subscription_table::Migration),
        ]
    }
}
