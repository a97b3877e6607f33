//! Handlers for contact form submissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::contact::{Contact, CreateContact};
use kartuli_db::models::validation;
use kartuli_db::repositories::ContactRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// Request body for `PATCH /admin/contacts/{id}/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContactStatusRequest {
    #[validate(custom(function = "validation::contact_status"))]
    pub status: String,
}

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContact>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, interest = %contact.interest, "Contact form submitted");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Contact form submitted successfully".into(),
            id: contact.id,
        }),
    ))
}

/// GET /api/admin/contacts
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// PATCH /api/admin/contacts/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateContactStatusRequest>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::not_found("Contact"))?;
    tracing::info!(contact_id = id, status = %contact.status, admin_id = %admin.id(), "Contact status changed");
    Ok(Json(contact))
}
