//! Repository for the `tours` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::tour::{CreateTour, Tour, TourFilter, UpdateTour};

/// Column list shared across queries to avoid repetition.
///
/// `price` is cast to text so it round-trips as a fixed-point string.
const COLUMNS: &str = "id, title, title_ka, title_ru, description, description_ka, \
                        description_ru, price::TEXT AS price, duration, max_people, includes, \
                        includes_ka, includes_ru, category, image_url, region_id, featured, \
                        created_at, updated_at";

/// Provides CRUD operations for tours.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTour) -> Result<Tour, sqlx::Error> {
        let query = format!(
            "INSERT INTO tours (
                title, title_ka, title_ru, description, description_ka, description_ru,
                price, duration, max_people, includes, includes_ka, includes_ru,
                category, image_url, region_id, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7::NUMERIC, $8, $9, $10, $11, $12, $13, $14, $15,
                     COALESCE($16, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&input.title)
            .bind(&input.title_ka)
            .bind(&input.title_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.price)
            .bind(&input.duration)
            .bind(input.max_people)
            .bind(&input.includes)
            .bind(&input.includes_ka)
            .bind(&input.includes_ru)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.region_id)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a tour by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tours ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tour>, sqlx::Error> {
        Self::list_filtered(pool, &TourFilter::default()).await
    }

    /// List tours narrowed by category, region and/or featured flag.
    ///
    /// Each `None` filter field matches every row.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &TourFilter,
    ) -> Result<Vec<Tour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tours
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::BIGINT IS NULL OR region_id = $2)
               AND ($3::BOOLEAN IS NULL OR featured = $3)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&filter.category)
            .bind(filter.region_id)
            .bind(filter.featured)
            .fetch_all(pool)
            .await
    }

    /// Update a tour. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET
                title = COALESCE($2, title),
                title_ka = COALESCE($3, title_ka),
                title_ru = COALESCE($4, title_ru),
                description = COALESCE($5, description),
                description_ka = COALESCE($6, description_ka),
                description_ru = COALESCE($7, description_ru),
                price = COALESCE($8::NUMERIC, price),
                duration = COALESCE($9, duration),
                max_people = COALESCE($10, max_people),
                includes = COALESCE($11, includes),
                includes_ka = COALESCE($12, includes_ka),
                includes_ru = COALESCE($13, includes_ru),
                category = COALESCE($14, category),
                image_url = COALESCE($15, image_url),
                region_id = COALESCE($16, region_id),
                featured = COALESCE($17, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_ka)
            .bind(&input.title_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.price)
            .bind(&input.duration)
            .bind(input.max_people)
            .bind(&input.includes)
            .bind(&input.includes_ka)
            .bind(&input.includes_ru)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.region_id)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tour by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while bookings still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
