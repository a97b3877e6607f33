//! HTTP-level tests for contact submissions and bookings.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, post_json, post_raw};
use kartuli_db::models::tour::CreateTour;
use kartuli_db::repositories::{BookingRepo, ContactRepo, TourRepo};
use serde_json::json;
use sqlx::PgPool;

async fn tour(pool: &PgPool, price: &str) -> i64 {
    TourRepo::create(
        pool,
        &CreateTour {
            title: "Tbilisi Old Town".into(),
            description: "Sulfur baths and Narikala fortress.".into(),
            price: price.into(),
            duration: "Half Day".into(),
            max_people: 10,
            includes: "Guide".into(),
            category: "cultural".into(),
            image_url: "https://example.com/tbilisi.jpg".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

fn booking(tour_id: i64, people: i32) -> serde_json::Value {
    json!({
        "tourId": tour_id,
        "firstName": "Ana",
        "lastName": "Kapanadze",
        "email": "ana@example.ge",
        "phone": "+995 555 123 456",
        "numberOfPeople": people,
        "preferredDate": "next spring",
    })
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_submission_is_stored(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = json!({
        "firstName": "Ana",
        "lastName": "K",
        "email": "a@b.com",
        "interest": "wine-tours",
        "message": "Hi",
    });
    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Contact form submitted successfully");
    let id = json["id"].as_i64().expect("id must be numeric");

    let stored = ContactRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.status, "new");
    assert_eq!(stored.interest, "wine-tours");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = json!({
        "firstName": "Ana",
        "lastName": "K",
        "email": "not-an-email",
        "interest": "wine-tours",
        "message": "Hi",
    });
    let response = post_json(app.clone(), "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("email"));

    let response = post_json(app, "/api/contact", json!({ "firstName": "Ana" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(ContactRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_raw(app, "/api/contact", "{\"firstName\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_total_is_price_times_people(pool: PgPool) {
    let tour_id = tour(&pool, "150.00").await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/bookings", booking(tour_id, 3)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Booking created successfully");
    assert_eq!(json["totalPrice"], "450.00");

    let stored = BookingRepo::find_by_id(&pool, json["id"].as_i64().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.preferred_date, "next spring");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_client_total_is_ignored(pool: PgPool) {
    let tour_id = tour(&pool, "99.50").await;
    let app = common::build_test_app(pool);

    let mut body = booking(tour_id, 2);
    body["totalPrice"] = json!("1.00");
    let response = post_json(app, "/api/bookings", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["totalPrice"], "199.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_unknown_tour_is_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/bookings", booking(777_777, 2)).await;

    assert_error(response, StatusCode::NOT_FOUND, "Tour not found").await;
    assert!(BookingRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_validation(pool: PgPool) {
    let tour_id = tour(&pool, "150.00").await;
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/bookings", booking(tour_id, 0)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = booking(tour_id, 2);
    body["phone"] = json!("");
    let response = post_json(app, "/api/bookings", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
