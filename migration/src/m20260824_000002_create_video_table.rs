use sea_orm_migration::{prelude::*, schema::*};

use super::m20260824_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(pk_auto(Video::Id))
                    .col(string(Video::Title))
                    .col(text(Video::Description))
                    .col(string(Video::Url))
                    .col(string_null(Video::Thumbnail))
                    .col(integer(Video::UserId))
                    .col(
                        timestamp(Video::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_user_id")
                            .from(Video::Table, Video::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    Title,
    Description,
    Url,
    Thumbnail,
    UserId,
    CreatedAt,
}
