//! HTTP-level tests for the cart: identity, dedup, scoping, and merging.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, cookie_header, delete_with, get, get_with, post_json_with,
    put_json_with,
};
use kartuli_core::roles::ROLE_USER;
use kartuli_db::models::product::CreateProduct;
use kartuli_db::repositories::ProductRepo;
use serde_json::json;
use sqlx::PgPool;

const GUEST: (&str, &str) = ("x-session-id", "guest-token-0001");
const OTHER_GUEST: (&str, &str) = ("x-session-id", "guest-token-0002");

async fn product(pool: &PgPool, name: &str, in_stock: bool) -> i64 {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.into(),
            description: "Handmade in Georgia".into(),
            price: "15.00".into(),
            category: "food".into(),
            image_url: "https://example.com/p.jpg".into(),
            in_stock: Some(in_stock),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

async fn add(app: axum::Router, header: (&str, &str), body: serde_json::Value) -> serde_json::Value {
    let response = post_json_with(app, "/api/cart", body, &[header]).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cart_requires_an_identity(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/cart").await;
    assert_error(response, StatusCode::BAD_REQUEST, "Missing cart session").await;

    let response = get_with(app, "/api/cart", &[("x-session-id", "bad token!")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adding_same_product_twice_increments_quantity(pool: PgPool) {
    let churchkhela = product(&pool, "Churchkhela", true).await;
    let app = common::build_test_app(pool);

    let first = add(app.clone(), GUEST, json!({ "productId": churchkhela })).await;
    assert_eq!(first["quantity"], 1);
    let second = add(app.clone(), GUEST, json!({ "productId": churchkhela })).await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["quantity"], 2);

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["product"]["name"], "Churchkhela");
    assert_eq!(items[0]["product"]["price"], "15.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_rejects_bad_input(pool: PgPool) {
    let sold_out = product(&pool, "Svan Tower Miniature", false).await;
    let honey = product(&pool, "Mountain Honey", true).await;
    let app = common::build_test_app(pool);

    let response = post_json_with(app.clone(), "/api/cart", json!({ "productId": sold_out }), &[GUEST]).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Product is out of stock").await;

    let response = post_json_with(app.clone(), "/api/cart", json!({ "productId": 999999 }), &[GUEST]).await;
    assert_error(response, StatusCode::NOT_FOUND, "Product not found").await;

    let response = post_json_with(
        app.clone(),
        "/api/cart",
        json!({ "productId": honey, "quantity": 0 }),
        &[GUEST],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_quantity(pool: PgPool) {
    let salt = product(&pool, "Svan Salt", true).await;
    let app = common::build_test_app(pool);
    let item = add(app.clone(), GUEST, json!({ "productId": salt, "quantity": 2 })).await;
    let uri = format!("/api/cart/{}", item["id"]);

    let response = put_json_with(app.clone(), &uri, json!({ "quantity": 5 }), &[GUEST]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["quantity"], 5);

    for bad in [json!({ "quantity": 0 }), json!({ "quantity": -3 }), json!({ "quantity": 100 })] {
        let response = put_json_with(app.clone(), &uri, bad, &[GUEST]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Invalid quantity"));
    }

    let response = put_json_with(app, "/api/cart/999999", json!({ "quantity": 1 }), &[GUEST]).await;
    assert_error(response, StatusCode::NOT_FOUND, "Cart item not found").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_sessions_items_are_invisible(pool: PgPool) {
    let wine = product(&pool, "Saperavi", true).await;
    let app = common::build_test_app(pool);
    let item = add(app.clone(), GUEST, json!({ "productId": wine, "quantity": 3 })).await;
    let uri = format!("/api/cart/{}", item["id"]);

    let response = put_json_with(app.clone(), &uri, json!({ "quantity": 1 }), &[OTHER_GUEST]).await;
    assert_error(response, StatusCode::NOT_FOUND, "Cart item not found").await;

    let response = delete_with(app.clone(), &uri, &[OTHER_GUEST]).await;
    assert_error(response, StatusCode::NOT_FOUND, "Cart item not found").await;

    let response = get_with(app.clone(), "/api/cart", &[OTHER_GUEST]).await;
    assert_eq!(body_json(response).await, json!([]));

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    let items = body_json(response).await;
    assert_eq!(items[0]["quantity"], 3, "owner's item must be unchanged");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_and_clear(pool: PgPool) {
    let a = product(&pool, "Tkemali", true).await;
    let b = product(&pool, "Adjika", true).await;
    let c = product(&pool, "Sulguni", true).await;
    let app = common::build_test_app(pool);

    let item = add(app.clone(), GUEST, json!({ "productId": a })).await;
    add(app.clone(), GUEST, json!({ "productId": b })).await;
    add(app.clone(), GUEST, json!({ "productId": c })).await;

    let response = delete_with(app.clone(), &format!("/api/cart/{}", item["id"]), &[GUEST]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Item removed from cart");

    let response = delete_with(app.clone(), "/api/cart", &[GUEST]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Cart cleared");
    assert_eq!(json["removed"], 2);

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signed_in_user_ignores_guest_header(pool: PgPool) {
    let wine = product(&pool, "Kindzmarauli", true).await;
    let app = common::build_test_app(pool.clone());
    let (_user, cookie) = common::user_session(&pool, app.clone(), "shopper").await;

    let response = post_json_with(
        app.clone(),
        "/api/cart",
        json!({ "productId": wine }),
        &[cookie_header(&cookie), GUEST],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["sessionId"]
        .as_str()
        .unwrap()
        .starts_with("user:"));

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_guest_cart_merges_on_login(pool: PgPool) {
    let wine = product(&pool, "Mukuzani", true).await;
    let honey = product(&pool, "Chestnut Honey", true).await;
    common::create_user(&pool, "returning", ROLE_USER).await;
    let app = common::build_test_app(pool);

    // The user already has one bottle in their own cart.
    let cookie = common::login(app.clone(), "returning").await;
    let response = post_json_with(
        app.clone(),
        "/api/cart",
        json!({ "productId": wine }),
        &[cookie_header(&cookie)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // As a guest they add two more bottles and a jar of honey.
    add(app.clone(), GUEST, json!({ "productId": wine, "quantity": 2 })).await;
    add(app.clone(), GUEST, json!({ "productId": honey })).await;

    let body = json!({ "username": "returning", "password": common::TEST_PASSWORD });
    let response = post_json_with(app.clone(), "/api/login", body, &[GUEST]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = common::session_cookie(&response).unwrap();

    let response = get_with(app.clone(), "/api/cart", &[cookie_header(&cookie)]).await;
    let items = body_json(response).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    let wine_row = items.iter().find(|i| i["productId"] == wine).unwrap();
    assert_eq!(wine_row["quantity"], 3);

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(body_json(response).await, json!([]), "guest cart must be emptied");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_product_leaves_carts(pool: PgPool) {
    let wine = product(&pool, "Khvanchkara", true).await;
    let app = common::build_test_app(pool.clone());
    add(app.clone(), GUEST, json!({ "productId": wine })).await;

    ProductRepo::delete(&pool, wine).await.unwrap();

    let response = get_with(app, "/api/cart", &[GUEST]).await;
    assert_eq!(body_json(response).await, json!([]));
}
