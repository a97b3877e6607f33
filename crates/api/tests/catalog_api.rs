//! HTTP-level tests for the public catalog: regions, tours, products, blog.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get};
use kartuli_db::models::blog_post::CreateBlogPost;
use kartuli_db::repositories::BlogPostRepo;
use sqlx::PgPool;

async fn seeded_app(pool: &PgPool) -> axum::Router {
    kartuli_db::seed::seed_catalog(pool).await.unwrap();
    common::build_test_app(pool.clone())
}

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_regions_list_and_lookup(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let regions = get_json(app.clone(), "/api/regions").await;
    let regions = regions.as_array().unwrap();
    assert_eq!(regions.len(), 4);

    let kakheti = get_json(app.clone(), "/api/regions/slug/kakheti").await;
    assert_eq!(kakheti["name"], "Kakheti");
    assert_eq!(kakheti["featured"], true);

    let by_id = get_json(app, &format!("/api/regions/{}", kakheti["id"])).await;
    assert_eq!(by_id["slug"], "kakheti");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_region_is_404(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let response = get(app.clone(), "/api/regions/999999").await;
    assert_error(response, StatusCode::NOT_FOUND, "Region not found").await;

    let response = get(app, "/api/regions/slug/atlantis").await;
    assert_error(response, StatusCode::NOT_FOUND, "Region not found").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_catalog_lists_are_empty(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in ["/api/regions", "/api/tours", "/api/products", "/api/blog"] {
        let json = get_json(app.clone(), uri).await;
        assert_eq!(json, serde_json::json!([]), "{uri} must be empty");
    }
}

// ---------------------------------------------------------------------------
// Tours
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tours_filters(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let all = get_json(app.clone(), "/api/tours").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let wine = get_json(app.clone(), "/api/tours?category=wine").await;
    let wine = wine.as_array().unwrap();
    assert_eq!(wine.len(), 1);
    assert!(wine.iter().all(|t| t["category"] == "wine"));
    assert_eq!(wine[0]["price"], "150.00");

    let featured = get_json(app.clone(), "/api/tours?featured=true").await;
    let featured = featured.as_array().unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|t| t["featured"] == true));

    let region_id = wine[0]["regionId"].as_i64().unwrap();
    let in_region = get_json(app.clone(), &format!("/api/tours?region={region_id}")).await;
    let in_region = in_region.as_array().unwrap();
    assert!(!in_region.is_empty());
    assert!(in_region.iter().all(|t| t["regionId"] == region_id));

    let combined = get_json(app, "/api/tours?category=adventure&featured=false").await;
    assert_eq!(combined, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tours_reject_malformed_filters(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let response = get(app.clone(), "/api/tours?featured=maybe").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/tours?region=kakheti").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tour_by_id(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let tours = get_json(app.clone(), "/api/tours").await;
    let id = tours[0]["id"].as_i64().unwrap();

    let tour = get_json(app.clone(), &format!("/api/tours/{id}")).await;
    assert_eq!(tour["id"], id);
    assert!(tour["titleKa"].is_string());
    assert!(tour["titleRu"].is_null());

    let response = get(app, "/api/tours/424242").await;
    assert_error(response, StatusCode::NOT_FOUND, "Tour not found").await;
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_products_filters(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let all = get_json(app.clone(), "/api/products").await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let food = get_json(app.clone(), "/api/products?category=food").await;
    let food = food.as_array().unwrap();
    assert_eq!(food.len(), 2);
    assert!(food.iter().all(|p| p["category"] == "food"));

    let featured_wine = get_json(app.clone(), "/api/products?category=wine&featured=true").await;
    let featured_wine = featured_wine.as_array().unwrap();
    assert_eq!(featured_wine.len(), 1);
    assert_eq!(featured_wine[0]["name"], "Kakheti Saperavi 2020");

    let none = get_json(app, "/api/products?category=jewellery").await;
    assert_eq!(none, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_by_id(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let products = get_json(app.clone(), "/api/products").await;
    let id = products[0]["id"].as_i64().unwrap();

    let product = get_json(app.clone(), &format!("/api/products/{id}")).await;
    assert_eq!(product["id"], id);
    assert!(product["inStock"].is_boolean());

    let response = get(app, "/api/products/424242").await;
    assert_error(response, StatusCode::NOT_FOUND, "Product not found").await;
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

async fn draft(pool: &PgPool, slug: &str) {
    BlogPostRepo::create(
        pool,
        &CreateBlogPost {
            title: "Draft".into(),
            excerpt: "Not yet".into(),
            content: "Work in progress".into(),
            category: "Wine".into(),
            image_url: "https://example.com/draft.jpg".into(),
            slug: slug.into(),
            published: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_lists_published_newest_first(pool: PgPool) {
    let app = seeded_app(&pool).await;
    draft(&pool, "secret-draft").await;

    let posts = get_json(app.clone(), "/api/blog").await;
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["published"] == true));
    assert_eq!(posts[0]["slug"], "sacred-art-georgian-supra");
    assert_eq!(posts[1]["slug"], "winemaking-traditions-modern-georgia");

    let wine = get_json(app, "/api/blog?category=Wine").await;
    let wine = wine.as_array().unwrap();
    assert_eq!(wine.len(), 1);
    assert_eq!(wine[0]["category"], "Wine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_slug_hides_drafts(pool: PgPool) {
    let app = seeded_app(&pool).await;
    draft(&pool, "secret-draft").await;

    let post = get_json(app.clone(), "/api/blog/sacred-art-georgian-supra").await;
    assert_eq!(post["title"], "The Sacred Art of Georgian Supra");

    let draft = get(app.clone(), "/api/blog/secret-draft").await;
    assert_error(draft, StatusCode::NOT_FOUND, "Blog post not found").await;

    let missing = get(app, "/api/blog/no-such-post").await;
    assert_error(missing, StatusCode::NOT_FOUND, "Blog post not found").await;
}
