//! User domain models and parameters.
//!
//! Provides the account domain model, the full profile aggregate returned by
//! authenticated endpoints, and parameter types for registration. The password
//! hash lives only on the domain model; DTO conversion drops it so it can never
//! appear in a response body.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{
    engagement::{VideoReaction, VideoReactionDto},
    video::{Video, VideoDto},
    watch_later::{WatchLaterEntry, WatchLaterEntryDto},
};

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash of the account password. Never serialized.
    pub password_hash: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            image: entity.image,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is intentionally not part of the DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

/// Flat user representation used inside nested includes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a user row. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub image: Option<String>,
}

/// Parameters for registering a new account. Carries the plaintext password
/// only as far as the auth service, which hashes it before persistence.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
}

/// A user together with the fixed relation graph returned by authenticated
/// endpoints: authored videos, subscription edges in both directions, video
/// likes, and the watch-later list (each entry with its video and owner).
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub videos: Vec<Video>,
    pub subscribed_by: Vec<User>,
    pub subscribing: Vec<User>,
    pub watch_later: Vec<WatchLaterEntry>,
    pub video_likes: Vec<VideoReaction>,
}

impl UserProfile {
    /// Converts the profile aggregate to a DTO for API responses.
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user: self.user.into_dto(),
            videos: self.videos.into_iter().map(|v| v.into_dto()).collect(),
            subscribed_by: self
                .subscribed_by
                .into_iter()
                .map(|u| u.into_dto())
                .collect(),
            subscribing: self.subscribing.into_iter().map(|u| u.into_dto()).collect(),
            watch_later: self.watch_later.into_iter().map(|w| w.into_dto()).collect(),
            video_likes: self.video_likes.into_iter().map(|l| l.into_dto()).collect(),
        }
    }
}

/// Full user profile as serialized to clients: the flat user fields plus the
/// fixed eager-include arrays, under the same JSON keys the original API used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub videos: Vec<VideoDto>,
    #[serde(rename = "subscribedBy")]
    pub subscribed_by: Vec<UserDto>,
    pub subscribing: Vec<UserDto>,
    pub watch_later: Vec<WatchLaterEntryDto>,
    pub video_likes: Vec<VideoReactionDto>,
}
