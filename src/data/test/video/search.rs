use super::*;

/// Tests searching videos by a title substring.
///
/// Expected: Ok with only the matching videos, each carrying its owner
#[tokio::test]
async fn matches_title_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let rust_video = factory::video::VideoFactory::new(db, user.id)
        .title("Learning Rust in a weekend")
        .build()
        .await?;
    factory::video::VideoFactory::new(db, user.id)
        .title("Cooking pasta")
        .build()
        .await?;

    let repo = VideoRepository::new(db);
    let result = repo.search("Rust").await;

    assert!(result.is_ok());
    let hits = result.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].video.id, rust_video.id);
    assert_eq!(hits[0].owner.id, user.id);

    Ok(())
}

/// Tests that `%` and `_` in the search text match literally.
///
/// "100%" must not match "100x achieved" through the LIKE wildcard, and
/// "a_b" must not match "axb".
///
/// Expected: Ok with only the titles containing the literal characters
#[tokio::test]
async fn wildcards_in_search_text_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let percent_video = factory::video::VideoFactory::new(db, user.id)
        .title("Conversion rate 100% achieved")
        .build()
        .await?;
    factory::video::VideoFactory::new(db, user.id)
        .title("Conversion rate 100x achieved")
        .build()
        .await?;
    let underscore_video = factory::video::VideoFactory::new(db, user.id)
        .title("Reading a_b notation")
        .build()
        .await?;
    factory::video::VideoFactory::new(db, user.id)
        .title("Reading axb notation")
        .build()
        .await?;

    let repo = VideoRepository::new(db);

    let hits = repo.search("100%").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].video.id, percent_video.id);

    let hits = repo.search("a_b").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].video.id, underscore_video.id);

    Ok(())
}

/// Tests searching with a string no title contains.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_video_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::video::VideoFactory::new(db, user.id)
        .title("Cooking pasta")
        .build()
        .await?;

    let repo = VideoRepository::new(db);
    let result = repo.search("quantum").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
