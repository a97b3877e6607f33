//! Repository for the `cart_items` table.
//!
//! Every method is scoped by a cart key (`session_id`); an item id that
//! belongs to another cart behaves as if it did not exist.

use kartuli_core::cart::MAX_QUANTITY;
use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart_item::CartItem;

const COLUMNS: &str = "id, session_id, product_id, quantity, created_at, updated_at";

/// Provides cart operations keyed by cart session.
pub struct CartRepo;

impl CartRepo {
    /// List the items in one cart, oldest first.
    pub async fn list_for_session(
        pool: &PgPool,
        session_id: &str,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cart_items WHERE session_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Add `quantity` of a product to a cart.
    ///
    /// If the product is already in the cart the quantities are summed
    /// (capped at [`MAX_QUANTITY`]) on the existing row.
    pub async fn add(
        pool: &PgPool,
        session_id: &str,
        product_id: DbId,
        quantity: i32,
    ) -> Result<CartItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (session_id, product_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_cart_items_session_product
             DO UPDATE SET quantity = LEAST(cart_items.quantity + EXCLUDED.quantity, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(session_id)
            .bind(product_id)
            .bind(quantity)
            .bind(MAX_QUANTITY)
            .fetch_one(pool)
            .await
    }

    /// Set the quantity of an item in the given cart.
    ///
    /// Returns `None` if the item does not exist in that cart.
    pub async fn update_quantity(
        pool: &PgPool,
        id: DbId,
        session_id: &str,
        quantity: i32,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_items SET quantity = $3
             WHERE id = $1 AND session_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(id)
            .bind(session_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// Remove one item from the given cart. Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, id: DbId, session_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND session_id = $2")
            .bind(id)
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Empty a cart, returning the number of rows removed.
    pub async fn clear(pool: &PgPool, session_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Move every item of cart `from` into cart `into`, summing quantities of
    /// products present in both (capped at [`MAX_QUANTITY`]), and empty `from`.
    ///
    /// A single statement: only the rows the `DELETE` removed are inserted, so
    /// an item added to `from` concurrently is either moved or left in place.
    /// Returns the number of items moved.
    pub async fn merge_sessions(pool: &PgPool, from: &str, into: &str) -> Result<u64, sqlx::Error> {
        if from == into {
            return Ok(0);
        }

        let result = sqlx::query(
            "WITH moved AS (
                 DELETE FROM cart_items WHERE session_id = $1
                 RETURNING product_id, quantity
             )
             INSERT INTO cart_items (session_id, product_id, quantity)
             SELECT $2, product_id, quantity FROM moved
             ON CONFLICT ON CONSTRAINT uq_cart_items_session_product
             DO UPDATE SET quantity = LEAST(cart_items.quantity + EXCLUDED.quantity, $3)",
        )
        .bind(from)
        .bind(into)
        .bind(MAX_QUANTITY)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
