//! Repository for the `products` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Column list shared across queries to avoid repetition.
///
/// `price` is cast to text so it round-trips as a fixed-point string.
const COLUMNS: &str = "id, name, name_ka, name_ru, description, description_ka, description_ru, \
                        price::TEXT AS price, category, image_url, in_stock, featured, \
                        created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (
                name, name_ka, name_ru, description, description_ka, description_ru,
                price, category, image_url, in_stock, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7::NUMERIC, $8, $9,
                     COALESCE($10, true), COALESCE($11, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.name_ka)
            .bind(&input.name_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.in_stock)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every product whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ANY($1)");
        sqlx::query_as::<_, Product>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all products ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        Self::list_filtered(pool, &ProductFilter::default()).await
    }

    /// List products narrowed by category and/or featured flag.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::BOOLEAN IS NULL OR featured = $2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&filter.category)
            .bind(filter.featured)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                name_ka = COALESCE($3, name_ka),
                name_ru = COALESCE($4, name_ru),
                description = COALESCE($5, description),
                description_ka = COALESCE($6, description_ka),
                description_ru = COALESCE($7, description_ru),
                price = COALESCE($8::NUMERIC, price),
                category = COALESCE($9, category),
                image_url = COALESCE($10, image_url),
                in_stock = COALESCE($11, in_stock),
                featured = COALESCE($12, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_ka)
            .bind(&input.name_ru)
            .bind(&input.description)
            .bind(&input.description_ka)
            .bind(&input.description_ru)
            .bind(&input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.in_stock)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Cart rows for it are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
