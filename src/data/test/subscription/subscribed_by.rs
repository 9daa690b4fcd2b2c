use super::*;

/// Tests listing a channel's subscribers.
///
/// The edge is directional: the channel's subscriber list and the
/// subscriber's channel list come from opposite columns.
///
/// Expected: Ok with the subscribing users only
#[tokio::test]
async fn lists_subscribers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::user::create_user(db).await?;
    let fan1 = factory::user::create_user(db).await?;
    let fan2 = factory::user::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.create(fan1.id, channel.id).await?;
    repo.create(fan2.id, channel.id).await?;

    let result = repo.subscribed_by(channel.id).await;

    assert!(result.is_ok());
    let fans = result.unwrap();
    assert_eq!(fans.len(), 2);
    let ids: Vec<i32> = fans.iter().map(|u| u.id).collect();
    assert!(ids.contains(&fan1.id));
    assert!(ids.contains(&fan2.id));

    // The channel follows nobody back
    assert!(repo.subscribing(channel.id).await?.is_empty());

    Ok(())
}
