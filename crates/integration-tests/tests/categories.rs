//! Category repository against a live database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use shop_core::CategoryId;
use shop_integration_tests::{TestContext, unique};
use shop_server::db::ErrorKind;
use shop_server::models::NewCategory;

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_create_then_get_round_trips() {
    let ctx = TestContext::connect().await;

    let input = NewCategory {
        name: unique("flowers"),
        description: "cut and potted".to_string(),
    };
    let created = ctx.repo.categories().create(&input).await.unwrap();
    assert_eq!(created.name, input.name);
    assert_eq!(created.description, input.description);

    let fetched = ctx.repo.categories().get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_duplicate_name_is_already_exists() {
    let ctx = TestContext::connect().await;

    let input = NewCategory::named(unique("phone"));
    ctx.repo.categories().create(&input).await.unwrap();

    let err = ctx.repo.categories().create(&input).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::AlreadyExists));
    assert_eq!(err.operation(), "categories.create");

    let matching = ctx
        .repo
        .categories()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|c| c.name == input.name)
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_list_all_includes_created_in_id_order() {
    let ctx = TestContext::connect().await;

    let first = ctx.category().await;
    let second = ctx.category().await;

    let all = ctx.repo.categories().list_all().await.unwrap();
    let first_pos = all.iter().position(|c| c.id == first.id).unwrap();
    let second_pos = all.iter().position(|c| c.id == second.id).unwrap();
    assert!(first_pos < second_pos);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_get_missing_is_not_found() {
    let ctx = TestContext::connect().await;

    let err = ctx
        .repo
        .categories()
        .get_by_id(CategoryId::new(i32::MAX))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
