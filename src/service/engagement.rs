//! Like/dislike service for business logic.
//!
//! Every action checks its target first so a missing video or comment is a
//! not-found error rather than a foreign key violation surfacing as a 500.

use sea_orm::DatabaseConnection;

use crate::{
    data::{comment::CommentRepository, engagement::EngagementRepository, video::VideoRepository},
    error::AppError,
    model::engagement::{CommentReaction, LikedVideo, VideoReaction},
};

/// Service providing business logic for likes and dislikes.
pub struct EngagementService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EngagementService<'a> {
    /// Creates a new EngagementService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_video(&self, video_id: i32) -> Result<(), AppError> {
        let video = VideoRepository::new(self.db).find_by_id(video_id).await?;
        if video.is_none() {
            return Err(AppError::NotFound("Video not found".to_string()));
        }
        Ok(())
    }

    async fn require_comment(&self, comment_id: i32) -> Result<(), AppError> {
        let comment = CommentRepository::new(self.db).find_by_id(comment_id).await?;
        if comment.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }
        Ok(())
    }

    /// Likes a video.
    ///
    /// # Returns
    /// - `Ok(VideoReaction)` - Like row created
    /// - `Err(AppError::NotFound)` - The video does not exist
    pub async fn like_video(&self, user_id: i32, video_id: i32) -> Result<VideoReaction, AppError> {
        self.require_video(video_id).await?;

        let reaction = EngagementRepository::new(self.db)
            .like_video(user_id, video_id)
            .await?;
        Ok(reaction)
    }

    /// Dislikes a video.
    pub async fn dislike_video(
        &self,
        user_id: i32,
        video_id: i32,
    ) -> Result<VideoReaction, AppError> {
        self.require_video(video_id).await?;

        let reaction = EngagementRepository::new(self.db)
            .dislike_video(user_id, video_id)
            .await?;
        Ok(reaction)
    }

    /// Likes a comment.
    ///
    /// # Returns
    /// - `Ok(CommentReaction)` - Like row created
    /// - `Err(AppError::NotFound)` - The comment does not exist
    pub async fn like_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<CommentReaction, AppError> {
        self.require_comment(comment_id).await?;

        let reaction = EngagementRepository::new(self.db)
            .like_comment(user_id, comment_id)
            .await?;
        Ok(reaction)
    }

    /// Dislikes a comment.
    pub async fn dislike_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<CommentReaction, AppError> {
        self.require_comment(comment_id).await?;

        let reaction = EngagementRepository::new(self.db)
            .dislike_comment(user_id, comment_id)
            .await?;
        Ok(reaction)
    }

    /// Lists the videos a user has liked, with owners attached.
    pub async fn liked_videos(&self, user_id: i32) -> Result<Vec<LikedVideo>, AppError> {
        let liked = EngagementRepository::new(self.db).liked_videos(user_id).await?;
        Ok(liked)
    }
}
