use super::*;

use sea_orm::EntityTrait;

/// Tests creating a comment on a video.
///
/// Expected: Ok with comment created and linked to user and video
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, video) = factory::helpers::create_video_with_owner(db).await?;
    let commenter = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParam {
            comment_text: "First!".to_string(),
            user_id: commenter.id,
            video_id: video.id,
        })
        .await;

    assert!(result.is_ok());
    let comment = result.unwrap();
    assert_eq!(comment.comment_text, "First!");
    assert_eq!(comment.user_id, commenter.id);
    assert_eq!(comment.video_id, video.id);

    // Verify comment exists in database
    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?;
    assert!(db_comment.is_some());

    Ok(())
}

/// Tests that the same user can comment on the same video repeatedly.
///
/// Expected: Ok with two distinct rows
#[tokio::test]
async fn allows_multiple_comments_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, video) = factory::helpers::create_video_with_owner(db).await?;

    let repo = CommentRepository::new(db);
    let first = repo
        .create(CreateCommentParam {
            comment_text: "one".to_string(),
            user_id: user.id,
            video_id: video.id,
        })
        .await?;
    let second = repo
        .create(CreateCommentParam {
            comment_text: "two".to_string(),
            user_id: user.id,
            video_id: video.id,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
