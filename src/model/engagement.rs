//! Like/dislike domain models.
//!
//! Likes and dislikes share one shape per target kind, so a single reaction
//! model covers both sentiment tables for videos and another covers both for
//! comments. Which sentiment a row represents is determined by the repository
//! method that produced it.

use serde::Serialize;

use crate::model::video::{VideoWithOwner, VideoWithOwnerDto};

/// A like or dislike row on a video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoReaction {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
}

impl VideoReaction {
    /// Converts a `video_like` entity model at the repository boundary.
    pub fn from_like_entity(entity: entity::video_like::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            video_id: entity.video_id,
        }
    }

    /// Converts a `video_dislike` entity model at the repository boundary.
    pub fn from_dislike_entity(entity: entity::video_dislike::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            video_id: entity.video_id,
        }
    }

    /// Converts the reaction to a DTO for API responses.
    pub fn into_dto(self) -> VideoReactionDto {
        VideoReactionDto {
            id: self.id,
            user_id: self.user_id,
            video_id: self.video_id,
        }
    }
}

/// Video reaction row as serialized to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReactionDto {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
}

/// A like or dislike row on a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentReaction {
    pub id: i32,
    pub user_id: i32,
    pub comment_id: i32,
}

impl CommentReaction {
    /// Converts a `comment_like` entity model at the repository boundary.
    pub fn from_like_entity(entity: entity::comment_like::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            comment_id: entity.comment_id,
        }
    }

    /// Converts a `comment_dislike` entity model at the repository boundary.
    pub fn from_dislike_entity(entity: entity::comment_dislike::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            comment_id: entity.comment_id,
        }
    }

    /// Converts the reaction to a DTO for API responses.
    pub fn into_dto(self) -> CommentReactionDto {
        CommentReactionDto {
            id: self.id,
            user_id: self.user_id,
            comment_id: self.comment_id,
        }
    }
}

/// Comment reaction row as serialized to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReactionDto {
    pub id: i32,
    pub user_id: i32,
    pub comment_id: i32,
}

/// A like row together with the liked video and its owner, the shape returned
/// by `GET /likedVideos`.
#[derive(Debug, Clone, PartialEq)]
pub struct LikedVideo {
    pub reaction: VideoReaction,
    pub video: VideoWithOwner,
}

impl LikedVideo {
    /// Converts the aggregate to a DTO for API responses.
    pub fn into_dto(self) -> LikedVideoDto {
        LikedVideoDto {
            reaction: self.reaction.into_dto(),
            video: self.video.into_dto(),
        }
    }
}

/// Liked-video row as serialized to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikedVideoDto {
    #[serde(flatten)]
    pub reaction: VideoReactionDto,
    pub video: VideoWithOwnerDto,
}
