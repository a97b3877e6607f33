//! Handlers for the `/tours` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::tour::{CreateTour, Tour, TourFilter, UpdateTour};
use kartuli_db::repositories::{RegionRepo, TourRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /tours`.
#[derive(Debug, Default, Deserialize)]
pub struct TourQuery {
    pub category: Option<String>,
    pub region: Option<String>,
    pub featured: Option<String>,
}

impl TourQuery {
    fn into_filter(self) -> AppResult<TourFilter> {
        let region_id = match self.region.as_deref().filter(|r| !r.is_empty()) {
            Some(raw) => Some(
                raw.parse::<DbId>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid region id '{raw}'")))?,
            ),
            None => None,
        };
        Ok(TourFilter {
            category: self.category.filter(|c| !c.is_empty()),
            region_id,
            featured: parse_featured(self.featured.as_deref())?,
        })
    }
}

/// Parse the `featured` query flag. Absent or empty means no filter.
pub(crate) fn parse_featured(raw: Option<&str>) -> AppResult<Option<bool>> {
    match raw {
        None | Some("") => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(AppError::BadRequest(format!(
            "Invalid featured filter '{other}'. Must be true or false"
        ))),
    }
}

/// GET /api/tours?category=&region=&featured=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TourQuery>,
) -> AppResult<Json<Vec<Tour>>> {
    let filter = params.into_filter()?;
    let tours = TourRepo::list_filtered(&state.pool, &filter).await?;
    Ok(Json(tours))
}

/// GET /api/tours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tour>> {
    let tour = TourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Tour"))?;
    Ok(Json(tour))
}

/// POST /api/admin/tours
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateTour>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    ensure_region(&state, input.region_id).await?;
    let tour = TourRepo::create(&state.pool, &input).await?;
    tracing::info!(tour_id = tour.id, admin_id = %admin.id(), "Tour created");
    Ok((StatusCode::CREATED, Json(tour)))
}

/// PUT /api/admin/tours/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTour>,
) -> AppResult<Json<Tour>> {
    ensure_region(&state, input.region_id).await?;
    let tour = TourRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Tour"))?;
    tracing::info!(tour_id = id, admin_id = %admin.id(), "Tour updated");
    Ok(Json(tour))
}

/// DELETE /api/admin/tours/{id}
///
/// A tour that still has bookings cannot be deleted (409).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TourRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Tour"));
    }
    tracing::info!(tour_id = id, admin_id = %admin.id(), "Tour deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_region(state: &AppState, region_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = region_id {
        if !RegionRepo::exists(&state.pool, id).await? {
            return Err(AppError::BadRequest("Region not found".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn featured_flag_parsing() {
        assert_eq!(parse_featured(None).unwrap(), None);
        assert_eq!(parse_featured(Some("")).unwrap(), None);
        assert_eq!(parse_featured(Some("true")).unwrap(), Some(true));
        assert_eq!(parse_featured(Some("false")).unwrap(), Some(false));
        assert_matches!(parse_featured(Some("yes")), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn tour_query_into_filter() {
        let query = TourQuery {
            category: Some("wine".into()),
            region: Some("3".into()),
            featured: None,
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.category.as_deref(), Some("wine"));
        assert_eq!(filter.region_id, Some(3));
        assert_eq!(filter.featured, None);

        let bad = TourQuery {
            region: Some("kakheti".into()),
            ..Default::default()
        };
        assert_matches!(bad.into_filter(), Err(AppError::BadRequest(_)));
    }
}
