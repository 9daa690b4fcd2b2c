//! Watch-later data repository for database operations.

use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::{
    user::User,
    video::{Video, VideoWithOwner},
    watch_later::WatchLaterEntry,
};

/// Repository providing database operations for watch-later rows.
pub struct WatchLaterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WatchLaterRepository<'a> {
    /// Creates a new WatchLaterRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a watch-later row for the given user and video.
    ///
    /// # Arguments
    /// - `user` - The saving user, already resolved by the caller
    /// - `video` - The referenced video with its owner, already resolved by the caller
    ///
    /// # Returns
    /// - `Ok(WatchLaterEntry)` - The created row composed with the user and video
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user: User, video: VideoWithOwner) -> Result<WatchLaterEntry, DbErr> {
        let entity = entity::watch_later::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            video_id: ActiveValue::Set(video.video.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(WatchLaterEntry {
            id: entity.id,
            user_id: entity.user_id,
            video_id: entity.video_id,
            user,
            video,
        })
    }

    /// Gets all watch-later rows saved by the given user.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<WatchLaterEntry>, DbErr> {
        let rows = entity::prelude::WatchLater::find()
            .filter(entity::watch_later::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let video_ids: Vec<i32> = rows.iter().map(|row| row.video_id).collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| {
                DbErr::Custom(format!("watch-later rows reference missing user {}", user_id))
            })?;

        let mut videos: HashMap<i32, VideoWithOwner> = HashMap::new();
        for (video, owner) in entity::prelude::Video::find()
            .filter(entity::video::Column::Id.is_in(video_ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
        {
            let owner = owner.ok_or_else(|| {
                DbErr::Custom(format!("video {} has no owning user", video.id))
            })?;

            videos.insert(
                video.id,
                VideoWithOwner {
                    video: Video::from_entity(video),
                    owner: User::from_entity(owner),
                },
            );
        }

        rows.into_iter()
            .map(|row| {
                let video = videos.get(&row.video_id).cloned().ok_or_else(|| {
                    DbErr::Custom(format!(
                        "watch-later row references missing video {}",
                        row.video_id
                    ))
                })?;

                Ok(WatchLaterEntry {
                    id: row.id,
                    user_id: row.user_id,
                    video_id: row.video_id,
                    user: user.clone(),
                    video,
                })
            })
            .collect()
    }
}
