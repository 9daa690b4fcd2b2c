//! Watch-later service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{user::UserRepository, video::VideoRepository, watch_later::WatchLaterRepository},
    error::AppError,
    model::watch_later::WatchLaterEntry,
};

/// Service providing business logic for watch-later lists.
pub struct WatchLaterService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> WatchLaterService<'a> {
    /// Creates a new WatchLaterService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a video to the user's watch-later list.
    ///
    /// # Returns
    /// - `Ok(WatchLaterEntry)` - Row created, composed with the saving user and the video with its owner
    /// - `Err(AppError::NotFound)` - The video or the user does not exist
    /// - `Err(AppError)` - Database error
    pub async fn add(&self, user_id: i32, video_id: i32) -> Result<WatchLaterEntry, AppError> {
        let video = VideoRepository::new(self.db)
            .find_with_owner(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entry = WatchLaterRepository::new(self.db).create(user, video).await?;
        Ok(entry)
    }

    /// Lists the user's watch-later entries.
    pub async fn list(&self, user_id: i32) -> Result<Vec<WatchLaterEntry>, AppError> {
        let entries = WatchLaterRepository::new(self.db).list_for_user(user_id).await?;
        Ok(entries)
    }
}
