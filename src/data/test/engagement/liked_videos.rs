use super::*;

/// Tests listing the videos a user has liked.
///
/// Each entry pairs the like row with the liked video and its owner, and
/// likes from other users don't leak in.
///
/// Expected: Ok with only the caller's likes
#[tokio::test]
async fn lists_only_own_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, video1) = factory::helpers::create_video_with_owner(db).await?;
    let video2 = factory::video::create_video(db, owner.id).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    repo.like_video(viewer.id, video1.id).await?;
    repo.like_video(owner.id, video2.id).await?;

    let result = repo.liked_videos(viewer.id).await;

    assert!(result.is_ok());
    let liked = result.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].reaction.user_id, viewer.id);
    assert_eq!(liked[0].video.video.id, video1.id);
    assert_eq!(liked[0].video.owner.id, owner.id);

    Ok(())
}

/// Tests that a duplicate like yields two entries for the same video.
///
/// Expected: Ok with two entries both pointing at the same video
#[tokio::test]
async fn duplicate_likes_appear_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    repo.like_video(viewer.id, video.id).await?;
    repo.like_video(viewer.id, video.id).await?;

    let liked = repo.liked_videos(viewer.id).await?;

    assert_eq!(liked.len(), 2);
    assert_eq!(liked[0].video.video.id, video.id);
    assert_eq!(liked[1].video.video.id, video.id);

    Ok(())
}

/// Tests listing liked videos for a user with no likes.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    let result = repo.liked_videos(viewer.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
