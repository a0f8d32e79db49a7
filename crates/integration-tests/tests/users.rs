//! User repository against a live database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use shop_core::UserId;
use shop_integration_tests::{TestContext, new_user};
use shop_server::db::ErrorKind;

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_create_then_get_round_trips() {
    let ctx = TestContext::connect().await;

    let input = new_user();
    let created = ctx.repo.users().create(&input).await.unwrap();
    assert_eq!(created.email, input.email);
    assert_eq!(created.password, input.password);

    let by_id = ctx.repo.users().get_by_id(created.id).await.unwrap();
    assert_eq!(by_id, created);

    let by_email = ctx.repo.users().get_by_email(&input.email).await.unwrap();
    assert_eq!(by_email, created);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_duplicate_email_is_already_exists() {
    let ctx = TestContext::connect().await;

    let input = new_user();
    let created = ctx.repo.users().create(&input).await.unwrap();

    let mut twin = new_user();
    twin.email.clone_from(&input.email);
    twin.first_name = "Grace".to_string();
    let err = ctx.repo.users().create(&twin).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::AlreadyExists));

    let stored = ctx.repo.users().get_by_email(&input.email).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_missing_user_is_not_found() {
    let ctx = TestContext::connect().await;
    let users = ctx.repo.users();

    assert!(users.get_by_id(UserId::new(i32::MAX)).await.unwrap_err().is_not_found());
    assert!(
        users
            .get_by_email("nobody@nowhere.invalid")
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        users
            .update_password(UserId::new(i32::MAX), "x")
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_field_updates() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let users = ctx.repo.users();

    users.update_first_name(user.id, "Grace").await.unwrap();
    users.update_last_name(user.id, "Hopper").await.unwrap();
    users.update_password(user.id, "new-hash").await.unwrap();

    let updated = users.get_by_id(user.id).await.unwrap();
    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Hopper");
    assert_eq!(updated.password, "new-hash");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.phone, user.phone);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_delete_reports_existence() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;

    assert!(ctx.repo.users().delete_by_id(user.id).await.unwrap());
    assert!(ctx.repo.users().delete_by_id(user.id).await.unwrap_err().is_not_found());
    assert!(ctx.repo.users().get_by_id(user.id).await.unwrap_err().is_not_found());
}
