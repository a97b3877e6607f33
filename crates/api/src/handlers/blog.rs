//! Handlers for the `/blog` resource.
//!
//! The public routes only ever expose published posts. Admin routes see
//! drafts too.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use kartuli_db::repositories::BlogPostRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /blog`.
#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
}

/// GET /api/blog?category=
///
/// Published posts, newest first.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<BlogQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let posts = BlogPostRepo::list_published(&state.pool, category).await?;
    Ok(Json(posts))
}

/// GET /api/blog/{slug}
///
/// Drafts answer exactly like a missing slug.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| AppError::not_found("Blog post"))?;
    Ok(Json(post))
}

/// GET /api/admin/blog
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// POST /api/admin/blog
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let post = BlogPostRepo::create(&state.pool, &input).await?;
    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        published = post.published,
        admin_id = %admin.id(),
        "Blog post created"
    );
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/blog/{id}
///
/// Publishing a post that has no `publishedAt` stamps the current time.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Blog post"))?;
    tracing::info!(post_id = id, published = post.published, admin_id = %admin.id(), "Blog post updated");
    Ok(Json(post))
}

/// DELETE /api/admin/blog/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BlogPostRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Blog post"));
    }
    tracing::info!(post_id = id, admin_id = %admin.id(), "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}
