use super::*;

use entity::prelude::User;

/// Tests resolving a set of user ids in one query.
///
/// Expected: Ok with exactly the requested users
#[tokio::test]
async fn finds_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::user::create_user(db).await?;
    let user2 = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_ids(&[user1.id, user2.id]).await;

    assert!(result.is_ok());
    let users = result.unwrap();
    assert_eq!(users.len(), 2);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert!(ids.contains(&user1.id));
    assert!(ids.contains(&user2.id));

    Ok(())
}

/// Tests resolving an empty id set.
///
/// The repository short-circuits without querying the database.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_id_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_ids(&[]).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
