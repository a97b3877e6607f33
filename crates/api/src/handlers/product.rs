//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};
use kartuli_db::repositories::ProductRepo;
use serde::Deserialize;

use super::tour::parse_featured;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
}

/// GET /api/products?category=&featured=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        category: params.category.filter(|c| !c.is_empty()),
        featured: parse_featured(params.featured.as_deref())?,
    };
    let products = ProductRepo::list_filtered(&state.pool, &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product"))?;
    Ok(Json(product))
}

/// POST /api/admin/products
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, admin_id = %admin.id(), "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/admin/products/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Product"))?;
    tracing::info!(product_id = id, admin_id = %admin.id(), "Product updated");
    Ok(Json(product))
}

/// DELETE /api/admin/products/{id}
///
/// Cart rows holding the product are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Product"));
    }
    tracing::info!(product_id = id, admin_id = %admin.id(), "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
