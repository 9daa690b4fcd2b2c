//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{comment::CommentRepository, video::VideoRepository},
    error::AppError,
    model::comment::{CommentDetail, CreateCommentParam},
};

/// Service providing business logic for comments.
pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment on a video.
    ///
    /// The returned detail carries empty reaction arrays, matching the
    /// eager-include shape of the endpoint for a row that can't have
    /// reactions yet.
    ///
    /// # Returns
    /// - `Ok(CommentDetail)` - Comment created
    /// - `Err(AppError::NotFound)` - The target video does not exist
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateCommentParam) -> Result<CommentDetail, AppError> {
        let video = VideoRepository::new(self.db).find_by_id(param.video_id).await?;
        if video.is_none() {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        let comment = CommentRepository::new(self.db).create(param).await?;

        Ok(CommentDetail {
            comment,
            likes: Vec::new(),
            dislikes: Vec::new(),
        })
    }
}
