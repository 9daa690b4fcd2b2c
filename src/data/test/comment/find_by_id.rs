use super::*;

/// Tests finding a comment by its primary key.
///
/// Expected: Ok(Some(Comment))
#[tokio::test]
async fn finds_existing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, video) = factory::helpers::create_video_with_owner(db).await?;
    let created = factory::comment::create_comment(db, user.id, video.id).await?;

    let repo = CommentRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(result.is_ok());
    let comment = result.unwrap();
    assert!(comment.is_some());
    assert_eq!(comment.unwrap().comment_text, created.comment_text);

    Ok(())
}

/// Tests looking up a comment id that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo.find_by_id(99999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
