//! Blog post entity model and DTOs.

use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    pub excerpt: String,
    pub excerpt_ka: Option<String>,
    pub excerpt_ru: Option<String>,
    pub content: String,
    pub content_ka: Option<String>,
    pub content_ru: Option<String>,
    pub category: String,
    pub image_url: String,
    pub slug: String,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
///
/// A post created with `published = true` and no `publishedAt` is stamped
/// with the current time.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,
    pub excerpt_ka: Option<String>,
    pub excerpt_ru: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub content_ka: Option<String>,
    pub content_ru: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[validate(custom(function = "validation::slug"))]
    pub slug: String,
    /// Defaults to `false` if omitted.
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub title_ka: Option<String>,
    pub title_ru: Option<String>,
    #[validate(length(min = 1, message = "Excerpt must not be empty"))]
    pub excerpt: Option<String>,
    pub excerpt_ka: Option<String>,
    pub excerpt_ru: Option<String>,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    pub content_ka: Option<String>,
    pub content_ru: Option<String>,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    #[validate(custom(function = "validation::slug"))]
    pub slug: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}
