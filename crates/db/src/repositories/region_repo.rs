//! Repository for the `regions` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::region::{CreateRegion, Region, UpdateRegion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, name_ka, name_ru, description, description_ka, description_ru, \
                        image_url, main_attraction, location, location_ka, location_ru, \
                        best_time_to_visit, best_time_to_visit_ka, best_time_to_visit_ru, \
                        climate, climate_ka, climate_ru, how_to_reach, how_to_reach_ka, \
                        how_to_reach_ru, slug, featured, created_at, updated_at";

/// Provides CRUD operations for regions.
pub struct RegionRepo;

impl RegionRepo {
    /// Insert a new region, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRegion) -> Result<Region, sqlx::Error> {
        let query = format!(
            "INSERT INTO regions (
                name, name_ka, name_ru, description, description_ka, description_ru,
                image_url, main_attraction, location, location_ka, location_ru,
                best_time_to_visit, best_time_to_visit_ka, best_time_to_visit_ru,
                climate, climate_ka, climate_ru, how_to_reach, how_to_reach_ka, how_to_reach_ru,
                slug, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, COALESCE($22, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(&input.name)
            .bind(&input.name_ka)
            .bind(&input.name_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.image_url)
            .bind(&input.main_attraction)
            .bind(&input.location)
            .bind(&input.location_ka)
            .bind(&input.location_ru)
            .bind(&input.best_time_to_visit)
            .bind(&input.best_time_to_visit_ka)
            .bind(&input.best_time_to_visit_ru)
            .bind(&input.climate)
            .bind(&input.climate_ka)
            .bind(&input.climate_ru)
            .bind(&input.how_to_reach)
            .bind(&input.how_to_reach_ka)
            .bind(&input.how_to_reach_ru)
            .bind(&input.slug)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a region by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE id = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a region by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE slug = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all regions, featured first, then by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions ORDER BY featured DESC, id ASC");
        sqlx::query_as::<_, Region>(&query).fetch_all(pool).await
    }

    /// Update a region. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegion,
    ) -> Result<Option<Region>, sqlx::Error> {
        let query = format!(
            "UPDATE regions SET
                name = COALESCE($2, name),
                name_ka = COALESCE($3, name_ka),
                name_ru = COALESCE($4, name_ru),
                description = COALESCE($5, description),
                description_ka = COALESCE($6, description_ka),
                description_ru = COALESCE($7, description_ru),
                image_url = COALESCE($8, image_url),
                main_attraction = COALESCE($9, main_attraction),
                location = COALESCE($10, location),
                location_ka = COALESCE($11, location_ka),
                location_ru = COALESCE($12, location_ru),
                best_time_to_visit = COALESCE($13, best_time_to_visit),
                best_time_to_visit_ka = COALESCE($14, best_time_to_visit_ka),
                best_time_to_visit_ru = COALESCE($15, best_time_to_visit_ru),
                climate = COALESCE($16, climate),
                climate_ka = COALESCE($17, climate_ka),
                climate_ru = COALESCE($18, climate_ru),
                how_to_reach = COALESCE($19, how_to_reach),
                how_to_reach_ka = COALESCE($20, how_to_reach_ka),
                how_to_reach_ru = COALESCE($21, how_to_reach_ru),
                slug = COALESCE($22, slug),
                featured = COALESCE($23, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_ka)
            .bind(&input.name_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.image_url)
            .bind(&input.main_attraction)
            .bind(&input.location)
            .bind(&input.location_ka)
            .bind(&input.location_ru)
            .bind(&input.best_time_to_visit)
            .bind(&input.best_time_to_visit_ka)
            .bind(&input.best_time_to_visit_ru)
            .bind(&input.climate)
            .bind(&input.climate_ka)
            .bind(&input.climate_ru)
            .bind(&input.how_to_reach)
            .bind(&input.how_to_reach_ka)
            .bind(&input.how_to_reach_ru)
            .bind(&input.slug)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a region by ID. Tours in the region keep existing with no region.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM regions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if a region with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM regions WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }
}
