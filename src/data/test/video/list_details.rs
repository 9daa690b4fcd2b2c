use super::*;

use crate::data::engagement::EngagementRepository;

/// Tests listing all videos with their relations grouped per video.
///
/// Verifies that likes land on the video they belong to and not on others.
///
/// Expected: Ok with one detail per video and correctly grouped relations
#[tokio::test]
async fn groups_relations_per_video() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, video1) = factory::helpers::create_video_with_owner(db).await?;
    let video2 = factory::video::create_video(db, owner.id).await?;

    let engagement = EngagementRepository::new(db);
    engagement.like_video(owner.id, video1.id).await?;
    engagement.like_video(owner.id, video1.id).await?;
    engagement.dislike_video(owner.id, video2.id).await?;

    let repo = VideoRepository::new(db);
    let result = repo.list_details().await;

    assert!(result.is_ok());
    let details = result.unwrap();
    assert_eq!(details.len(), 2);

    let detail1 = details.iter().find(|d| d.video.id == video1.id).unwrap();
    assert_eq!(detail1.likes.len(), 2);
    assert_eq!(detail1.dislikes.len(), 0);
    assert_eq!(detail1.owner.id, owner.id);

    let detail2 = details.iter().find(|d| d.video.id == video2.id).unwrap();
    assert_eq!(detail2.likes.len(), 0);
    assert_eq!(detail2.dislikes.len(), 1);

    Ok(())
}

/// Tests listing details with no videos in the database.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_with_no_videos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VideoRepository::new(db);
    let result = repo.list_details().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
