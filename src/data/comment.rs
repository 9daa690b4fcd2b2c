//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::comment::{Comment, CreateCommentParam};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment row.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            comment_text: ActiveValue::Set(param.comment_text),
            user_id: ActiveValue::Set(param.user_id),
            video_id: ActiveValue::Set(param.video_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment by primary key.
    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }
}
