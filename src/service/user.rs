//! User service for profile assembly and subscriptions.
//!
//! The profile graph (videos, subscription edges in both directions, video
//! likes, watch-later entries) is fixed per the API contract, so assembly
//! lives here once and is shared by the auth flow, the auth guard, and the
//! user read endpoints.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        engagement::EngagementRepository, subscription::SubscriptionRepository,
        user::UserRepository, video::VideoRepository, watch_later::WatchLaterRepository,
    },
    error::AppError,
    model::user::{User, UserProfile},
};

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user's full profile graph, if the user exists.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found with relations loaded
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error during any of the queries
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(self.profile_for(user).await?))
    }

    /// Loads a user's full profile graph, treating a missing user as an error.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User found with relations loaded
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError)` - Database error during any of the queries
    pub async fn get_profile(&self, user_id: i32) -> Result<UserProfile, AppError> {
        self.find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Assembles the profile graph around an already-loaded user.
    pub(crate) async fn profile_for(&self, user: User) -> Result<UserProfile, AppError> {
        let videos = VideoRepository::new(self.db).list_by_user(user.id).await?;

        let subscriptions = SubscriptionRepository::new(self.db);
        let subscribed_by = subscriptions.subscribed_by(user.id).await?;
        let subscribing = subscriptions.subscribing(user.id).await?;

        let watch_later = WatchLaterRepository::new(self.db)
            .list_for_user(user.id)
            .await?;

        let video_likes = EngagementRepository::new(self.db)
            .video_likes_by_user(user.id)
            .await?;

        Ok(UserProfile {
            user,
            videos,
            subscribed_by,
            subscribing,
            watch_later,
            video_likes,
        })
    }

    /// Loads every user's full profile graph.
    pub async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        let users = UserRepository::new(self.db).list().await?;

        let mut profiles = Vec::with_capacity(users.len());
        for user in users {
            profiles.push(self.profile_for(user).await?);
        }

        Ok(profiles)
    }

    /// Lists every user except the caller, the candidate set for subscribing.
    pub async fn list_others(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).list_other_than(user_id).await?;
        Ok(users)
    }

    /// Subscribes one user to another and returns the subscriber's refreshed
    /// profile.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Edge created, profile reloaded
    /// - `Err(AppError::NotFound)` - The target user does not exist
    /// - `Err(AppError)` - Database error
    pub async fn subscribe(
        &self,
        subscriber_id: i32,
        channel_id: i32,
    ) -> Result<UserProfile, AppError> {
        let target = UserRepository::new(self.db).find_by_id(channel_id).await?;
        if target.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        SubscriptionRepository::new(self.db)
            .create(subscriber_id, channel_id)
            .await?;

        self.get_profile(subscriber_id).await
    }
}
