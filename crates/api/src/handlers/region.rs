//! Handlers for the `/regions` resource.
//!
//! Reads are public; mutations are mounted under `/admin/regions`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::region::{CreateRegion, Region, UpdateRegion};
use kartuli_db::repositories::RegionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/regions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Region>>> {
    let regions = RegionRepo::list(&state.pool).await?;
    Ok(Json(regions))
}

/// GET /api/regions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Region>> {
    let region = RegionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Region"))?;
    Ok(Json(region))
}

/// GET /api/regions/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Region>> {
    let region = RegionRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("Region"))?;
    Ok(Json(region))
}

/// POST /api/admin/regions
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateRegion>,
) -> AppResult<(StatusCode, Json<Region>)> {
    let region = RegionRepo::create(&state.pool, &input).await?;
    tracing::info!(region_id = region.id, slug = %region.slug, admin_id = %admin.id(), "Region created");
    Ok((StatusCode::CREATED, Json(region)))
}

/// PUT /api/admin/regions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateRegion>,
) -> AppResult<Json<Region>> {
    let region = RegionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Region"))?;
    tracing::info!(region_id = id, admin_id = %admin.id(), "Region updated");
    Ok(Json(region))
}

/// DELETE /api/admin/regions/{id}
///
/// Tours in the region are kept with their region cleared.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !RegionRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Region"));
    }
    tracing::info!(region_id = id, admin_id = %admin.id(), "Region deleted");
    Ok(StatusCode::NO_CONTENT)
}
