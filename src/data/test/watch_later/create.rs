use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests saving a video to a user's watch-later list.
///
/// Expected: Ok with the row composed with the video and its owner
#[tokio::test]
async fn creates_watch_later_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, video) = factory::helpers::create_video_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let videos = VideoRepository::new(db);
    let with_owner = videos.find_with_owner(video.id).await?.unwrap();

    let repo = WatchLaterRepository::new(db);
    let result = repo.create(User::from_entity(viewer.clone()), with_owner).await;

    assert!(result.is_ok());
    let entry = result.unwrap();
    assert_eq!(entry.user_id, viewer.id);
    assert_eq!(entry.video_id, video.id);
    assert_eq!(entry.user.id, viewer.id);
    assert_eq!(entry.video.owner.id, owner.id);

    // Verify row exists in database
    let count = entity::prelude::WatchLater::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
