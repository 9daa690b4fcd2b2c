use super::*;

use entity::prelude::User;

/// Tests listing every user except the caller.
///
/// Expected: Ok with all other users and never the excluded id
#[tokio::test]
async fn excludes_the_given_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::user::create_user(db).await?;
    let other1 = factory::user::create_user(db).await?;
    let other2 = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.list_other_than(me.id).await;

    assert!(result.is_ok());
    let users = result.unwrap();
    assert_eq!(users.len(), 2);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert!(ids.contains(&other1.id));
    assert!(ids.contains(&other2.id));
    assert!(!ids.contains(&me.id));

    Ok(())
}

/// Tests listing others when the caller is the only account.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.list_other_than(me.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
