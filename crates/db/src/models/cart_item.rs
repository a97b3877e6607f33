//! Cart item model and DTOs.

use kartuli_core::cart::MIN_QUANTITY;
use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::product::Product;
use crate::models::validation;

/// A cart row from the `cart_items` table.
///
/// `session_id` holds the cart key (`user:…` or `guest:…`), not the auth
/// session id.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: DbId,
    pub session_id: String,
    pub product_id: DbId,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cart row with its product embedded, as returned by `GET /cart`.
///
/// `product` is `None` only if the product vanished between the two reads.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Option<Product>,
}

/// DTO for adding a product to a cart.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub product_id: DbId,
    /// Defaults to 1 if omitted.
    #[validate(custom(function = "validation::quantity"))]
    pub quantity: Option<i32>,
}

impl AddCartItem {
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.unwrap_or(MIN_QUANTITY)
    }
}

/// DTO for setting the quantity of an existing cart row.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItem {
    #[validate(custom(function = "validation::quantity"))]
    pub quantity: i32,
}
