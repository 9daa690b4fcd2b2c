use super::*;

/// Tests listing a user's watch-later entries.
///
/// Entries saved by other users stay out of the result.
///
/// Expected: Ok with only the caller's entries
#[tokio::test]
async fn lists_only_own_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, video1) = factory::helpers::create_video_with_owner(db).await?;
    let video2 = factory::video::create_video(db, owner.id).await?;
    let viewer = factory::user::create_user(db).await?;

    let videos = VideoRepository::new(db);
    let repo = WatchLaterRepository::new(db);

    let with_owner1 = videos.find_with_owner(video1.id).await?.unwrap();
    repo.create(User::from_entity(viewer.clone()), with_owner1).await?;

    let with_owner2 = videos.find_with_owner(video2.id).await?.unwrap();
    repo.create(User::from_entity(owner.clone()), with_owner2).await?;

    let result = repo.list_for_user(viewer.id).await;

    assert!(result.is_ok());
    let entries = result.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].video_id, video1.id);
    assert_eq!(entries[0].user.id, viewer.id);
    assert_eq!(entries[0].video.owner.id, owner.id);

    Ok(())
}

/// Tests listing watch-later entries for a user who saved nothing.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::user::create_user(db).await?;

    let repo = WatchLaterRepository::new(db);
    let result = repo.list_for_user(viewer.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
