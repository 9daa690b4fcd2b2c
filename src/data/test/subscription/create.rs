use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a subscription edge between two users.
///
/// Expected: Ok with the edge stored
#[tokio::test]
async fn creates_subscription_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscriber = factory::user::create_user(db).await?;
    let channel = factory::user::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    let result = repo.create(subscriber.id, channel.id).await;

    assert!(result.is_ok());

    let edges = entity::prelude::Subscription::find().all(db).await?;
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].subscriber_id, subscriber.id);
    assert_eq!(edges[0].channel_id, channel.id);

    Ok(())
}

/// Tests that subscribing to the same channel twice creates two edges.
///
/// No uniqueness constraint guards the edge table.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn repeated_subscriptions_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscriber = factory::user::create_user(db).await?;
    let channel = factory::user::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.create(subscriber.id, channel.id).await?;
    repo.create(subscriber.id, channel.id).await?;

    let count = entity::prelude::Subscription::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
