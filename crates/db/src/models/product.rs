//! Product entity model and DTOs.

use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    pub price: String,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(custom(function = "validation::price"))]
    pub price: String,
    #[validate(custom(function = "validation::product_category"))]
    pub category: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    /// Defaults to `true` if omitted.
    pub in_stock: Option<bool>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub name_ka: Option<String>,
    pub name_ru: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    pub description_ka: Option<String>,
    pub description_ru: Option<String>,
    #[validate(custom(function = "validation::price"))]
    pub price: Option<String>,
    #[validate(custom(function = "validation::product_category"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

/// Optional narrowing for product listings. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}
