//! Region entity model and DTOs.

use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation;

/// A region row from the `regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: DbId,
    pub name: String,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    pub image_url: String,
    pub main_attraction: String,
    pub location: Option<String>,
    pub location_ka: Option<String>,
    pub location_ru: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub best_time_to_visit_ka: Option<String>,
    pub best_time_to_visit_ru: Option<String>,
    pub climate: Option<String>,
    pub climate_ka: Option<String>,
    pub climate_ru: Option<String>,
    pub how_to_reach: Option<String>,
    pub how_to_reach_ka: Option<String>,
    pub how_to_reach_ru: Option<String>,
    pub slug: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new region.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegion {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "Main attraction is required"))]
    pub main_attraction: String,
    pub location: Option<String>,
    pub location_ka: Option<String>,
    pub location_ru: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub best_time_to_visit_ka: Option<String>,
    pub best_time_to_visit_ru: Option<String>,
    pub climate: Option<String>,
    pub climate_ka: Option<String>,
    pub climate_ru: Option<String>,
    pub how_to_reach: Option<String>,
    pub how_to_reach_ka: Option<String>,
    pub how_to_reach_ru: Option<String>,
    #[validate(custom(function = "validation::slug"))]
    pub slug: String,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
}

/// DTO for updating an existing region. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegion {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Main attraction must not be empty"))]
    pub main_attraction: Option<String>,
    pub location: Option<String>,
    pub location_ka: Option<String>,
    pub location_ru: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub best_time_to_visit_ka: Option<String>,
    pub best_time_to_visit_ru: Option<String>,
    pub climate: Option<String>,
    pub climate_ka: Option<String>,
    pub climate_ru: Option<String>,
    pub how_to_reach: Option<String>,
    pub how_to_reach_ka: Option<String>,
    pub how_to_reach_ru: Option<String>,
    #[validate(custom(function = "validation::slug"))]
    pub slug: Option<String>,
    pub featured: Option<bool>,
}
