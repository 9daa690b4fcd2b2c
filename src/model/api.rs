//! Request and top-level response DTOs for the HTTP API.
//!
//! Request bodies use the camelCase field names the original clients send
//! (`firstName`, `subscribeId`, `commentText`, ...). Response DTOs for each
//! domain live next to their domain models.

use serde::{Deserialize, Serialize};

use crate::model::user::UserProfileDto;

/// Error response body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Request body for `POST /register`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Request body for `PATCH /subscribe`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeDto {
    pub subscribe_id: i32,
}

/// Request body for video-targeted actions (`/video_likes`, `/video_dislikes`,
/// `POST /watch_later`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRefDto {
    pub video_id: i32,
}

/// Request body for comment-targeted actions (`/comment_likes`, `/comment_dislikes`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRefDto {
    pub comment_id: i32,
}

/// Request body for `POST /comments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub comment_text: String,
    pub video_id: i32,
}

/// Request body for `POST /search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDto {
    pub searched_text: String,
}

/// Response body for `POST /register` and `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponseDto {
    pub user: UserProfileDto,
    pub token: String,
}
