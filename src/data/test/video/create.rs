use super::*;

use sea_orm::EntityTrait;

/// Tests creating a new video metadata row.
///
/// Verifies that the repository stores the server-generated storage path and
/// links the row to its owning user.
///
/// Expected: Ok with video created
#[tokio::test]
async fn creates_video() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = VideoRepository::new(db);
    let result = repo
        .create(CreateVideoParam {
            title: "My First Video".to_string(),
            description: "A test upload".to_string(),
            url: "public/3f1a.mp4".to_string(),
            thumbnail: Some("thumb.png".to_string()),
            user_id: user.id,
        })
        .await;

    assert!(result.is_ok());
    let video = result.unwrap();
    assert_eq!(video.title, "My First Video");
    assert_eq!(video.url, "public/3f1a.mp4");
    assert_eq!(video.user_id, user.id);

    // Verify video exists in database
    let db_video = entity::prelude::Video::find_by_id(video.id).one(db).await?;
    assert!(db_video.is_some());
    assert_eq!(db_video.unwrap().thumbnail, Some("thumb.png".to_string()));

    Ok(())
}

/// Tests creating a video without a thumbnail.
///
/// Expected: Ok with thumbnail stored as None
#[tokio::test]
async fn creates_video_without_thumbnail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = VideoRepository::new(db);
    let video = repo
        .create(CreateVideoParam {
            title: "Plain".to_string(),
            description: "No thumbnail".to_string(),
            url: "public/plain.mp4".to_string(),
            thumbnail: None,
            user_id: user.id,
        })
        .await?;

    assert!(video.thumbnail.is_none());

    Ok(())
}
