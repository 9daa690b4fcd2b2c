use super::*;

use entity::prelude::User;

/// Tests finding a user by their email address.
///
/// Expected: Ok(Some(User)) matching the created account
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("bob@example.com").await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.is_some());
    assert_eq!(user.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up an email no account is registered under.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("nobody@example.com").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
