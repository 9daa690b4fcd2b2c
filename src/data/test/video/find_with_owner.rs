use super::*;

/// Tests finding a video together with its owner.
///
/// Expected: Ok(Some(VideoWithOwner)) with matching ids
#[tokio::test]
async fn finds_video_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, video) = factory::helpers::create_video_with_owner(db).await?;

    let repo = VideoRepository::new(db);
    let result = repo.find_with_owner(video.id).await;

    assert!(result.is_ok());
    let with_owner = result.unwrap();
    assert!(with_owner.is_some());

    let with_owner = with_owner.unwrap();
    assert_eq!(with_owner.video.id, video.id);
    assert_eq!(with_owner.owner.id, user.id);
    assert_eq!(with_owner.owner.email, user.email);

    Ok(())
}

/// Tests looking up a video id that doesn't exist.
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
    let result = repo.find_with_owner(99999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
