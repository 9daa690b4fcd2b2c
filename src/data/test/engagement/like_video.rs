use super::*;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests liking a video.
///
/// Expected: Ok with a like row linking user and video
#[tokio::test]
async fn creates_like_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    let result = repo.like_video(viewer.id, video.id).await;

    assert!(result.is_ok());
    let reaction = result.unwrap();
    assert_eq!(reaction.user_id, viewer.id);
    assert_eq!(reaction.video_id, video.id);

    Ok(())
}

/// Tests that the same user liking the same video twice produces two rows.
///
/// Reactions are append-only with no uniqueness constraint, so repeats
/// accumulate rather than toggle.
///
/// Expected: Ok with two like rows in the database
#[tokio::test]
async fn repeated_likes_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    let first = repo.like_video(viewer.id, video.id).await?;
    let second = repo.like_video(viewer.id, video.id).await?;

    assert_ne!(first.id, second.id);

    let count = entity::prelude::VideoLike::find()
        .filter(entity::video_like::Column::VideoId.eq(video.id))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests disliking a video.
///
/// A dislike lands in its own table and leaves the like table untouched.
///
/// Expected: Ok with a dislike row and zero like rows
#[tokio::test]
async fn dislike_uses_separate_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = EngagementRepository::new(db);
    repo.dislike_video(viewer.id, video.id).await?;

    let likes = entity::prelude::VideoLike::find().count(db).await?;
    let dislikes = entity::prelude::VideoDislike::find().count(db).await?;
    assert_eq!(likes, 0);
    assert_eq!(dislikes, 1);

    Ok(())
}
