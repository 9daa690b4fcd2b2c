//! Subscription data repository for database operations.
//!
//! Subscription edges are append-only: the API exposes no unsubscribe, and no
//! uniqueness constraint prevents the same edge being inserted twice.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{data::user::UserRepository, model::user::User};

/// Repository providing database operations for subscription edges.
pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    /// Creates a new SubscriptionRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a subscription edge from `subscriber_id` to `channel_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Edge created
    /// - `Err(DbErr)` - Database error during insert (including a missing channel user)
    pub async fn create(&self, subscriber_id: i32, channel_id: i32) -> Result<(), DbErr> {
        entity::subscription::ActiveModel {
            subscriber_id: ActiveValue::Set(subscriber_id),
            channel_id: ActiveValue::Set(channel_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets the users the given user subscribes to.
    pub async fn subscribing(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let edges = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::SubscriberId.eq(user_id))
            .all(self.db)
            .await?;

        let channel_ids: Vec<i32> = edges.into_iter().map(|e| e.channel_id).collect();

        UserRepository::new(self.db).find_by_ids(&channel_ids).await
    }

    /// Gets the users subscribed to the given user.
    pub async fn subscribed_by(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let edges = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::ChannelId.eq(user_id))
            .all(self.db)
            .await?;

        let subscriber_ids: Vec<i32> = edges.into_iter().map(|e| e.subscriber_id).collect();

        UserRepository::new(self.db)
            .find_by_ids(&subscriber_ids)
            .await
    }
}
