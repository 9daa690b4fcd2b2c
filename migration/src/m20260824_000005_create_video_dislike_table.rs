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
                    .table(VideoDislike::Table)
                    .if_not_exists()
                    .col(pk_auto(VideoDislike::Id))
                    .col(integer(VideoDislike::UserId))
                    .col(integer(VideoDislike::VideoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_dislike_user_id")
                            .from(VideoDislike::Table, VideoDislike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_dislike_video_id")
                            .from(VideoDislike::Table, VideoDislike::VideoId)
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
            .drop_table(Table::drop().table(VideoDislike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VideoDislike {
    Table,
    Id,
    UserId,
    VideoId,
}
