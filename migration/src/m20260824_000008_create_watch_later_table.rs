use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260824_000001_create_user_table::User, m20260824_000002_create_video_table::Video,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchLater::Table)
                    .if_not_exists()
                    .col(pk_auto(WatchLater::Id))
                    .col(integer(WatchLater::UserId))
                    .col(integer(WatchLater::VideoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_later_user_id")
                            .from(WatchLater::Table, WatchLater::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_later_video_id")
                            .from(WatchLater::Table, WatchLater::VideoId)
                            .to(Video::Table, Video::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchLater::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WatchLater {
    Table,
    Id,
    UserId,
    VideoId,
}
