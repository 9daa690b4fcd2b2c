//! Video factory for creating test video entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test videos with customizable fields.
///
/// The owning user must already exist; pass its id to `new()`.
pub struct VideoFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    url: String,
    thumbnail: Option<String>,
    user_id: i32,
}

impl<'a> VideoFactory<'a> {
    /// Creates a new VideoFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Video {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - url: `"public/video-{id}.mp4"`
    /// - thumbnail: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Video {}", id),
            description: format!("Description {}", id),
            url: format!("public/video-{}.mp4", id),
            thumbnail: None,
            user_id,
        }
    }

    /// Sets the title for the video.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the video.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the stored file path for the video.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the thumbnail for the video.
    pub fn thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// Builds and inserts the video entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::video::Model)` - Created video entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::video::Model, DbErr> {
        entity::video::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            url: ActiveValue::Set(self.url),
            thumbnail: ActiveValue::Set(self.thumbnail),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a video with default values owned by the given user.
///
/// Shorthand for `VideoFactory::new(db, user_id).build().await`.
pub async fn create_video(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::video::Model, DbErr> {
    VideoFactory::new(db, user_id).build().await
}
