//! Video data repository for database operations.
//!
//! Handles video metadata rows and the eager-include shapes of the video read
//! endpoints. List queries batch their related loads with `is_in` filters and
//! group in memory rather than issuing one query per video.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::model::{
    comment::Comment,
    engagement::VideoReaction,
    user::User,
    video::{CreateVideoParam, Video, VideoDetail, VideoWithOwner},
};

/// Repository providing database operations for videos.
pub struct VideoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoRepository<'a> {
    /// Creates a new VideoRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new video row.
    ///
    /// # Arguments
    /// - `param` - Video creation parameters; `url` is the server-generated storage path
    ///
    /// # Returns
    /// - `Ok(Video)` - The created video
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateVideoParam) -> Result<Video, DbErr> {
        let entity = entity::video::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            url: ActiveValue::Set(param.url),
            thumbnail: ActiveValue::Set(param.thumbnail),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Video::from_entity(entity))
    }

    /// Finds a video by primary key.
    pub async fn find_by_id(&self, video_id: i32) -> Result<Option<Video>, DbErr> {
        let entity = entity::prelude::Video::find_by_id(video_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Video::from_entity))
    }

    /// Finds a video together with its owning user.
    ///
    /// # Returns
    /// - `Ok(Some(VideoWithOwner))` - Video and owner found
    /// - `Ok(None)` - No video with that id
    /// - `Err(DbErr)` - Database error, or an orphaned video row with no owner
    pub async fn find_with_owner(&self, video_id: i32) -> Result<Option<VideoWithOwner>, DbErr> {
        let Some((video, owner)) = entity::prelude::Video::find_by_id(video_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let owner = owner.ok_or_else(|| {
            DbErr::Custom(format!("video {} has no owning user", video.id))
        })?;

        Ok(Some(VideoWithOwner {
            video: Video::from_entity(video),
            owner: User::from_entity(owner),
        }))
    }

    /// Gets all videos authored by the given user.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Video>, DbErr> {
        let entities = entity::prelude::Video::find()
            .filter(entity::video::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Video::from_entity).collect())
    }

    /// Finds a video with the full detail shape: owner, comments, likes, dislikes.
    ///
    /// # Returns
    /// - `Ok(Some(VideoDetail))` - Video found with all relations loaded
    /// - `Ok(None)` - No video with that id
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_detail(&self, video_id: i32) -> Result<Option<VideoDetail>, DbErr> {
        let Some(with_owner) = self.find_with_owner(video_id).await? else {
            return Ok(None);
        };

        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::VideoId.eq(video_id))
            .all(self.db)
            .await?;

        let likes = entity::prelude::VideoLike::find()
            .filter(entity::video_like::Column::VideoId.eq(video_id))
            .all(self.db)
            .await?;

        let dislikes = entity::prelude::VideoDislike::find()
            .filter(entity::video_dislike::Column::VideoId.eq(video_id))
            .all(self.db)
            .await?;

        Ok(Some(VideoDetail {
            video: with_owner.video,
            owner: with_owner.owner,
            comments: comments.into_iter().map(Comment::from_entity).collect(),
            likes: likes
                .into_iter()
                .map(VideoReaction::from_like_entity)
                .collect(),
            dislikes: dislikes
                .into_iter()
                .map(VideoReaction::from_dislike_entity)
                .collect(),
        }))
    }

    /// Gets all videos with the full detail shape.
    ///
    /// Related rows are fetched in one batch per table and grouped in memory,
    /// so the query count stays constant regardless of how many videos exist.
    pub async fn list_details(&self) -> Result<Vec<VideoDetail>, DbErr> {
        let videos = entity::prelude::Video::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let video_ids: Vec<i32> = videos.iter().map(|(v, _)| v.id).collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut comments: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in entity::prelude::Comment::find()
            .filter(entity::comment::Column::VideoId.is_in(video_ids.clone()))
            .all(self.db)
            .await?
        {
            comments
                .entry(comment.video_id)
                .or_default()
                .push(Comment::from_entity(comment));
        }

        let mut likes: HashMap<i32, Vec<VideoReaction>> = HashMap::new();
        for like in entity::prelude::VideoLike::find()
            .filter(entity::video_like::Column::VideoId.is_in(video_ids.clone()))
            .all(self.db)
            .await?
        {
            likes
                .entry(like.video_id)
                .or_default()
                .push(VideoReaction::from_like_entity(like));
        }

        let mut dislikes: HashMap<i32, Vec<VideoReaction>> = HashMap::new();
        for dislike in entity::prelude::VideoDislike::find()
            .filter(entity::video_dislike::Column::VideoId.is_in(video_ids))
            .all(self.db)
            .await?
        {
            dislikes
                .entry(dislike.video_id)
                .or_default()
                .push(VideoReaction::from_dislike_entity(dislike));
        }

        videos
            .into_iter()
            .map(|(video, owner)| {
                let owner = owner.ok_or_else(|| {
                    DbErr::Custom(format!("video {} has no owning user", video.id))
                })?;

                Ok(VideoDetail {
                    comments: comments.remove(&video.id).unwrap_or_default(),
                    likes: likes.remove(&video.id).unwrap_or_default(),
                    dislikes: dislikes.remove(&video.id).unwrap_or_default(),
                    video: Video::from_entity(video),
                    owner: User::from_entity(owner),
                })
            })
            .collect()
    }

    /// Searches videos whose title contains the given text.
    ///
    /// Substring match via SQL `LIKE` (case-insensitive for ASCII on SQLite).
    /// `%`, `_`, and `\` in the search text are escaped so they match
    /// literally instead of acting as wildcards. No ranking or pagination;
    /// a non-matching string yields an empty vector.
    pub async fn search(&self, text: &str) -> Result<Vec<VideoWithOwner>, DbErr> {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");

        let rows = entity::prelude::Video::find()
            .filter(
                entity::video::Column::Title
                    .like(LikeExpr::new(format!("%{}%", escaped)).escape('\\')),
            )
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(video, owner)| {
                let owner = owner.ok_or_else(|| {
                    DbErr::Custom(format!("video {} has no owning user", video.id))
                })?;

                Ok(VideoWithOwner {
                    video: Video::from_entity(video),
                    owner: User::from_entity(owner),
                })
            })
            .collect()
    }
}
