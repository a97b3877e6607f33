//! Tour entity model and DTOs.

use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation;

/// A tour row from the `tours` table.
///
/// `price` is the `NUMERIC(10, 2)` column rendered as text (e.g. `"120.00"`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: DbId,
    pub title: String,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    pub price: String,
    pub duration: String,
    pub max_people: i32,
    pub includes: String,
    pub includes_ka: Option<String>,
    pub includes_ru: Option<String>,
    pub category: String,
    pub image_url: String,
    pub region_id: Option<DbId>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tour.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTour {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(custom(function = "validation::price"))]
    pub price: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[validate(range(min = 1, message = "Max people must be at least 1"))]
    pub max_people: i32,
    #[validate(length(min = 1, message = "Includes is required"))]
    pub includes: String,
    pub includes_ka: Option<String>,
    pub includes_ru: Option<String>,
    #[validate(custom(function = "validation::tour_category"))]
    pub category: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub region_id: Option<DbId>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
}

/// DTO for updating an existing tour. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTour {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(custom(function = "validation::price"))]
    pub price: Option<String>,
    #[validate(length(min = 1, message = "Duration must not be empty"))]
    pub duration: Option<String>,
    #[validate(range(min = 1, message = "Max people must be at least 1"))]
    pub max_people: Option<i32>,
    #[validate(length(min = 1, message = "Includes must not be empty"))]
    pub includes: Option<String>,
    pub includes_ka: Option<String>,
    pub includes_ru: Option<String>,
    #[validate(custom(function = "validation::tour_category"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    pub region_id: Option<DbId>,
    pub featured: Option<bool>,
}

/// Optional narrowing for tour listings. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct TourFilter {
    pub category: Option<String>,
    pub region_id: Option<DbId>,
    pub featured: Option<bool>,
}
