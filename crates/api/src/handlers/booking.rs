//! Handlers for tour bookings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::booking::{Booking, CreateBooking};
use kartuli_db::models::validation;
use kartuli_db::repositories::BookingRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for `POST /bookings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub message: String,
    pub id: DbId,
    /// Decimal string, tour price times party size.
    pub total_price: String,
}

/// Request body for `PATCH /admin/bookings/{id}/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(custom(function = "validation::booking_status"))]
    pub status: String,
}

/// POST /api/bookings
///
/// The total is priced from the tour at insert time; an unknown tour is 404.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking = BookingRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Tour"))?;

    tracing::info!(
        booking_id = booking.id,
        tour_id = booking.tour_id,
        people = booking.number_of_people,
        total_price = %booking.total_price,
        "Booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully".into(),
            id: booking.id,
            total_price: booking.total_price,
        }),
    ))
}

/// GET /api/admin/bookings
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// PATCH /api/admin/bookings/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBookingStatusRequest>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::not_found("Booking"))?;
    tracing::info!(booking_id = id, status = %booking.status, admin_id = %admin.id(), "Booking status changed");
    Ok(Json(booking))
}
