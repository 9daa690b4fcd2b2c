use super::*;

use entity::prelude::User;
use sea_orm::EntityTrait;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        email: email.to_string(),
        password_hash: "$2b$12$fakehashfakehashfakehash".to_string(),
        image: None,
    }
}

/// Tests creating a new user account.
///
/// Verifies that the repository inserts the row and returns a domain model
/// carrying the stored fields.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.create(param("alice@example.com")).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.image.is_none());

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().email, "alice@example.com");

    Ok(())
}

/// Tests that inserting a second user with the same email fails.
///
/// The email column carries a unique constraint, so the second insert
/// surfaces as a database error rather than silently creating a duplicate.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("taken@example.com")).await?;

    let result = repo.create(param("taken@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
