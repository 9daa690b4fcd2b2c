//! Video service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::video::VideoRepository,
    error::AppError,
    model::video::{CreateVideoParam, Video, VideoDetail, VideoWithOwner},
};

/// Service providing business logic for video metadata.
pub struct VideoService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VideoService<'a> {
    /// Creates a new VideoService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records metadata for an upload whose file has already been persisted.
    pub async fn create(&self, param: CreateVideoParam) -> Result<Video, AppError> {
        let video = VideoRepository::new(self.db).create(param).await?;
        Ok(video)
    }

    /// Lists every video with its full detail shape.
    pub async fn list(&self) -> Result<Vec<VideoDetail>, AppError> {
        let details = VideoRepository::new(self.db).list_details().await?;
        Ok(details)
    }

    /// Loads one video with its full detail shape.
    ///
    /// # Returns
    /// - `Ok(VideoDetail)` - Video found with relations loaded
    /// - `Err(AppError::NotFound)` - No video with that id
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, video_id: i32) -> Result<VideoDetail, AppError> {
        VideoRepository::new(self.db)
            .find_detail(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    /// Searches videos by a title substring.
    pub async fn search(&self, text: &str) -> Result<Vec<VideoWithOwner>, AppError> {
        let hits = VideoRepository::new(self.db).search(text).await?;
        Ok(hits)
    }
}
