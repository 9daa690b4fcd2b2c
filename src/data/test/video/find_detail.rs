use super::*;

use crate::data::{comment::CommentRepository, engagement::EngagementRepository};
use crate::model::comment::CreateCommentParam;

/// Tests loading a video with the full detail shape.
///
/// Verifies that owner, comments, likes, and dislikes are all attached.
///
/// Expected: Ok(Some(VideoDetail)) with all relations loaded
#[tokio::test]
async fn loads_all_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let comments = CommentRepository::new(db);
    comments
        .create(CreateCommentParam {
            comment_text: "Nice video".to_string(),
            user_id: viewer.id,
            video_id: video.id,
        })
        .await?;

    let engagement = EngagementRepository::new(db);
    engagement.like_video(viewer.id, video.id).await?;
    engagement.like_video(owner.id, video.id).await?;
    engagement.dislike_video(viewer.id, video.id).await?;

    let repo = VideoRepository::new(db);
    let result = repo.find_detail(video.id).await;

    assert!(result.is_ok());
    let detail = result.unwrap();
    assert!(detail.is_some());

    let detail = detail.unwrap();
    assert_eq!(detail.video.id, video.id);
    assert_eq!(detail.owner.id, owner.id);
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].comment_text, "Nice video");
    assert_eq!(detail.likes.len(), 2);
    assert_eq!(detail.dislikes.len(), 1);

    Ok(())
}

/// Tests loading the detail shape for a video with no activity.
///
/// Expected: Ok(Some(VideoDetail)) with empty relation vectors
#[tokio::test]
async fn loads_video_without_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;

    let repo = VideoRepository::new(db);
    let detail = repo.find_detail(video.id).await?.unwrap();

    assert!(detail.comments.is_empty());
    assert!(detail.likes.is_empty());
    assert!(detail.dislikes.is_empty());

    Ok(())
}

/// Tests loading the detail shape for a missing video.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_video() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VideoRepository::new(db);
    let result = repo.find_detail(99999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
