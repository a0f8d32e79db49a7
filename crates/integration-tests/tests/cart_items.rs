//! Cart item repository against a live database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use shop_core::ProductId;
use shop_integration_tests::TestContext;
use shop_server::db::ErrorKind;
use shop_server::models::CartItem;

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_create_then_list() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let category = ctx.category().await;
    let first = ctx.product(&category).await;
    let second = ctx.product(&category).await;

    let items = vec![
        CartItem {
            user_id: user.id,
            product_id: first.id,
            quantity: 3,
        },
        CartItem {
            user_id: user.id,
            product_id: second.id,
            quantity: 1,
        },
    ];
    for item in &items {
        ctx.repo.cart_items().create(item).await.unwrap();
    }

    assert_eq!(ctx.repo.cart_items().list_by_user(user.id).await.unwrap(), items);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_duplicate_item_is_already_exists() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let category = ctx.category().await;
    let product = ctx.product(&category).await;

    let item = CartItem {
        user_id: user.id,
        product_id: product.id,
        quantity: 1,
    };
    ctx.repo.cart_items().create(&item).await.unwrap();

    let err = ctx.repo.cart_items().create(&item).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::AlreadyExists));
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_quantity_updates() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let category = ctx.category().await;
    let product = ctx.product(&category).await;
    let cart = ctx.repo.cart_items();

    cart.create(&CartItem {
        user_id: user.id,
        product_id: product.id,
        quantity: 1,
    })
    .await
    .unwrap();

    cart.update_quantity(user.id, product.id, 4).await.unwrap();
    cart.add_quantity(user.id, product.id, 2).await.unwrap();

    let listed = cart.list_by_user(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].quantity, 6);

    let missing = ProductId::new(i32::MAX);
    assert!(
        cart.update_quantity(user.id, missing, 1)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        cart.add_quantity(user.id, missing, 1)
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_concurrent_add_quantity_accumulates() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let category = ctx.category().await;
    let product = ctx.product(&category).await;

    ctx.repo
        .cart_items()
        .create(&CartItem {
            user_id: user.id,
            product_id: product.id,
            quantity: 0,
        })
        .await
        .unwrap();

    let (user_id, product_id) = (user.id, product.id);
    let first = ctx.repo.clone();
    let second = ctx.repo.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(async move { first.cart_items().add_quantity(user_id, product_id, 5).await }),
        tokio::spawn(async move { second.cart_items().add_quantity(user_id, product_id, 5).await }),
    );
    a.unwrap().unwrap();
    b.unwrap().unwrap();

    let listed = ctx.repo.cart_items().list_by_user(user.id).await.unwrap();
    assert_eq!(listed[0].quantity, 10);
}

#[tokio::test]
#[ignore = "Requires SHOP_TEST_DATABASE_URL"]
async fn test_clear_for_user() {
    let ctx = TestContext::connect().await;
    let user = ctx.user().await;
    let bystander = ctx.user().await;
    let category = ctx.category().await;
    let product = ctx.product(&category).await;
    let cart = ctx.repo.cart_items();

    // Clearing an empty cart succeeds and touches nothing
    assert_eq!(cart.clear_for_user(user.id).await.unwrap(), 0);

    for owner in [&user, &bystander] {
        cart.create(&CartItem {
            user_id: owner.id,
            product_id: product.id,
            quantity: 1,
        })
        .await
        .unwrap();
    }

    assert_eq!(cart.clear_for_user(user.id).await.unwrap(), 1);
    assert!(cart.list_by_user(user.id).await.unwrap().is_empty());
    assert_eq!(cart.list_by_user(bystander.id).await.unwrap().len(), 1);
}
