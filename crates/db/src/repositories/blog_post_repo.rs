//! Repository for the `blog_posts` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, title_ka, title_ru, excerpt, excerpt_ka, excerpt_ru, \
                        content, content_ka, content_ru, category, image_url, slug, \
                        published, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// A post created as published without an explicit `published_at` is
    /// stamped with the current time.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (
                title, title_ka, title_ru, excerpt, excerpt_ka, excerpt_ru,
                content, content_ka, content_ru, category, image_url, slug,
                published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     COALESCE($13, false),
                     CASE WHEN COALESCE($13, false) THEN COALESCE($14, NOW()) ELSE $14 END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.title_ka)
            .bind(&input.title_ru)
            .bind(&input.excerpt)
            .bind(&input.excerpt_ka)
            .bind(&input.excerpt_ru)
            .bind(&input.content)
            .bind(&input.content_ka)
            .bind(&input.content_ru)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.slug)
            .bind(input.published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID, published or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug, published or not.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every post, drafts included, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// List published posts, optionally narrowed to one category.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE published
               AND ($1::TEXT IS NULL OR category = $1)
             ORDER BY published_at DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Publishing a post that has never been stamped sets `published_at`
    /// to now; an explicit `published_at` always wins.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                title_ka = COALESCE($3, title_ka),
                title_ru = COALESCE($4, title_ru),
                excerpt = COALESCE($5, excerpt),
                excerpt_ka = COALESCE($6, excerpt_ka),
                excerpt_ru = COALESCE($7, excerpt_ru),
                content = COALESCE($8, content),
                content_ka = COALESCE($9, content_ka),
                content_ru = COALESCE($10, content_ru),
                category = COALESCE($11, category),
                image_url = COALESCE($12, image_url),
                slug = COALESCE($13, slug),
                published = COALESCE($14, published),
                published_at = CASE
                    WHEN $15::TIMESTAMPTZ IS NOT NULL THEN $15
                    WHEN COALESCE($14, published) AND published_at IS NULL THEN NOW()
                    ELSE published_at
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_ka)
            .bind(&input.title_ru)
            .bind(&input.excerpt)
            .bind(&input.excerpt_ka)
            .bind(&input.excerpt_ru)
            .bind(&input.content)
            .bind(&input.content_ka)
            .bind(&input.content_ru)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.slug)
            .bind(input.published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
