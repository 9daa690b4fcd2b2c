//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::engagement::{CommentReaction, CommentReactionDto};

/// A comment left on a video.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub comment_text: String,
    pub user_id: i32,
    pub video_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            comment_text: entity.comment_text,
            user_id: entity.user_id,
            video_id: entity.video_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the comment domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            comment_text: self.comment_text,
            user_id: self.user_id,
            video_id: self.video_id,
            created_at: self.created_at,
        }
    }
}

/// Flat comment representation used inside nested includes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub comment_text: String,
    pub user_id: i32,
    pub video_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a comment row.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub comment_text: String,
    pub user_id: i32,
    pub video_id: i32,
}

/// A comment with its reaction rows, the shape returned by `POST /comments`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDetail {
    pub comment: Comment,
    pub likes: Vec<CommentReaction>,
    pub dislikes: Vec<CommentReaction>,
}

impl CommentDetail {
    /// Converts the aggregate to a DTO for API responses.
    pub fn into_dto(self) -> CommentDetailDto {
        CommentDetailDto {
            comment: self.comment.into_dto(),
            comment_likes: self.likes.into_iter().map(|l| l.into_dto()).collect(),
            comment_dislikes: self.dislikes.into_iter().map(|d| d.into_dto()).collect(),
        }
    }
}

/// Comment plus reactions as serialized to clients, under the same JSON keys
/// the original API used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentDetailDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub comment_likes: Vec<CommentReactionDto>,
    pub comment_dislikes: Vec<CommentReactionDto>,
}
