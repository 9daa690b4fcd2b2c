//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Both the commenting user and the target video must already exist.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    comment_text: String,
    user_id: i32,
    video_id: i32,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with a default comment text of
    /// `"Comment {id}"` where id is auto-incremented.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, video_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            comment_text: format!("Comment {}", id),
            user_id,
            video_id,
        }
    }

    /// Sets the comment text.
    pub fn comment_text(mut self, comment_text: impl Into<String>) -> Self {
        self.comment_text = comment_text.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            comment_text: ActiveValue::Set(self.comment_text),
            user_id: ActiveValue::Set(self.user_id),
            video_id: ActiveValue::Set(self.video_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
///
/// Shorthand for `CommentFactory::new(db, user_id, video_id).build().await`.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: i32,
    video_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user_id, video_id).build().await
}
