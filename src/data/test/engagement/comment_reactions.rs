use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests liking a comment.
///
/// Expected: Ok with a like row linking user and comment
#[tokio::test]
async fn creates_comment_like_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, video) = factory::helpers::create_video_with_owner(db).await?;
    let comment = factory::comment::create_comment(db, user.id, video.id).await?;

    let repo = EngagementRepository::new(db);
    let result = repo.like_comment(user.id, comment.id).await;

    assert!(result.is_ok());
    let reaction = result.unwrap();
    assert_eq!(reaction.user_id, user.id);
    assert_eq!(reaction.comment_id, comment.id);

    Ok(())
}

/// Tests disliking a comment.
///
/// Expected: Ok with a dislike row and zero comment like rows
#[tokio::test]
async fn creates_comment_dislike_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, video) = factory::helpers::create_video_with_owner(db).await?;
    let comment = factory::comment::create_comment(db, user.id, video.id).await?;

    let repo = EngagementRepository::new(db);
    repo.dislike_comment(user.id, comment.id).await?;

    let likes = entity::prelude::CommentLike::find().count(db).await?;
    let dislikes = entity::prelude::CommentDislike::find().count(db).await?;
    assert_eq!(likes, 0);
    assert_eq!(dislikes, 1);

    Ok(())
}
