//! Like/dislike data repository for database operations.
//!
//! Reaction rows are append-only. Repeated likes from the same user create
//! additional rows rather than toggling, so counts reflect raw row totals.

use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::{
    engagement::{CommentReaction, LikedVideo, VideoReaction},
    user::User,
    video::{Video, VideoWithOwner},
};

/// Repository providing database operations for like and dislike rows.
pub struct EngagementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngagementRepository<'a> {
    /// Creates a new EngagementRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a like row for a video.
    pub async fn like_video(&self, user_id: i32, video_id: i32) -> Result<VideoReaction, DbErr> {
        let entity = entity::video_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            video_id: ActiveValue::Set(video_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VideoReaction::from_like_entity(entity))
    }

    /// Inserts a dislike row for a video.
    pub async fn dislike_video(&self, user_id: i32, video_id: i32) -> Result<VideoReaction, DbErr> {
        let entity = entity::video_dislike::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            video_id: ActiveValue::Set(video_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VideoReaction::from_dislike_entity(entity))
    }

    /// Inserts a like row for a comment.
    pub async fn like_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<CommentReaction, DbErr> {
        let entity = entity::comment_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            comment_id: ActiveValue::Set(comment_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CommentReaction::from_like_entity(entity))
    }

    /// Inserts a dislike row for a comment.
    pub async fn dislike_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<CommentReaction, DbErr> {
        let entity = entity::comment_dislike::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            comment_id: ActiveValue::Set(comment_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CommentReaction::from_dislike_entity(entity))
    }

    /// Gets all video like rows created by the given user.
    pub async fn video_likes_by_user(&self, user_id: i32) -> Result<Vec<VideoReaction>, DbErr> {
        let entities = entity::prelude::VideoLike::find()
            .filter(entity::video_like::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(VideoReaction::from_like_entity)
            .collect())
    }

    /// Gets the videos a user has liked, each paired with the like row and the
    /// video's owner.
    ///
    /// Videos and owners are loaded in one batch query and joined in memory.
    pub async fn liked_videos(&self, user_id: i32) -> Result<Vec<LikedVideo>, DbErr> {
        let likes = self.video_likes_by_user(user_id).await?;

        let video_ids: Vec<i32> = likes.iter().map(|like| like.video_id).collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

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

        likes
            .into_iter()
            .map(|reaction| {
                let video = videos.get(&reaction.video_id).cloned().ok_or_else(|| {
                    DbErr::Custom(format!("like references missing video {}", reaction.video_id))
                })?;

                Ok(LikedVideo { reaction, video })
            })
            .collect()
    }
}
