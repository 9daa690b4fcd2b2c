use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260824_000001_create_user_table::User, m20260824_000003_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentDislike::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentDislike::Id))
                    .col(integer(CommentDislike::UserId))
                    .col(integer(CommentDislike::CommentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_dislike_user_id")
                            .from(CommentDislike::Table, CommentDislike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_dislike_comment_id")
                            .from(CommentDislike::Table, CommentDislike::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentDislike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentDislike {
    Table,
    Id,
    UserId,
    CommentId,
}
