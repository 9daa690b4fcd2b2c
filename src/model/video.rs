//! Video domain models and parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{
    comment::{Comment, CommentDto},
    engagement::{VideoReaction, VideoReactionDto},
    user::{User, UserDto},
};

/// An uploaded video's metadata. The binary itself lives on disk at `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Converts an entity model to a video domain model at the repository boundary.
    pub fn from_entity(entity: entity::video::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            url: entity.url,
            thumbnail: entity.thumbnail,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the video domain model to a DTO for API responses.
    pub fn into_dto(self) -> VideoDto {
        VideoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            thumbnail: self.thumbnail,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

/// Flat video representation used inside nested includes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a video row. `url` is the server-generated storage
/// path, never the client-supplied filename.
#[derive(Debug, Clone)]
pub struct CreateVideoParam {
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub user_id: i32,
}

/// A video together with its owning user, the shape returned by search and
/// embedded in watch-later and liked-video rows.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoWithOwner {
    pub video: Video,
    pub owner: User,
}

impl VideoWithOwner {
    /// Converts the aggregate to a DTO for API responses.
    pub fn into_dto(self) -> VideoWithOwnerDto {
        VideoWithOwnerDto {
            video: self.video.into_dto(),
            user: self.owner.into_dto(),
        }
    }
}

/// Video plus owner as serialized to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoWithOwnerDto {
    #[serde(flatten)]
    pub video: VideoDto,
    pub user: UserDto,
}

/// A video with the full eager-include shape of the video read endpoints:
/// owner, comments, likes, and dislikes.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetail {
    pub video: Video,
    pub owner: User,
    pub comments: Vec<Comment>,
    pub likes: Vec<VideoReaction>,
    pub dislikes: Vec<VideoReaction>,
}

impl VideoDetail {
    /// Converts the aggregate to a DTO for API responses.
    pub fn into_dto(self) -> VideoDetailDto {
        VideoDetailDto {
            video: self.video.into_dto(),
            user: self.owner.into_dto(),
            comments: self.comments.into_iter().map(|c| c.into_dto()).collect(),
            video_likes: self.likes.into_iter().map(|l| l.into_dto()).collect(),
            video_dislikes: self.dislikes.into_iter().map(|d| d.into_dto()).collect(),
        }
    }
}

/// Full video detail as serialized to clients, under the same JSON keys the
/// original API used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDetailDto {
    #[serde(flatten)]
    pub video: VideoDto,
    pub user: UserDto,
    pub comments: Vec<CommentDto>,
    pub video_likes: Vec<VideoReactionDto>,
    pub video_dislikes: Vec<VideoReactionDto>,
}
