//! Health endpoint and shared middleware behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["dbHealthy"], true);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_set_on_response(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    assert!(
        response.headers().contains_key("x-request-id"),
        "every response must carry x-request-id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
