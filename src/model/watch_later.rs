//! Watch-later domain models.

use serde::Serialize;

use crate::model::{
    user::{User, UserDto},
    video::{VideoWithOwner, VideoWithOwnerDto},
};

/// A watch-later row together with the saving user, its video, and the
/// video's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchLaterEntry {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
    pub user: User,
    pub video: VideoWithOwner,
}

impl WatchLaterEntry {
    /// Converts the aggregate to a DTO for API responses.
    pub fn into_dto(self) -> WatchLaterEntryDto {
        WatchLaterEntryDto {
            id: self.id,
            user_id: self.user_id,
            video_id: self.video_id,
            user: self.user.into_dto(),
            video: self.video.into_dto(),
        }
    }
}

/// Watch-later row as serialized to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchLaterEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
    pub user: UserDto,
    pub video: VideoWithOwnerDto,
}
