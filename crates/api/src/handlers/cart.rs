//! Handlers for the `/cart` resource.
//!
//! Every operation is scoped to the caller's [`CartSession`]; an item id
//! belonging to another cart behaves as if it did not exist.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kartuli_core::types::DbId;
use kartuli_db::models::cart_item::{AddCartItem, CartItem, CartItemWithProduct, UpdateCartItem};
use kartuli_db::repositories::{CartRepo, ProductRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::cart::CartSession;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response body for `DELETE /cart`.
#[derive(Debug, Serialize)]
pub struct ClearCartResponse {
    pub message: String,
    pub removed: u64,
}

/// GET /api/cart
///
/// Cart rows with their products embedded, oldest first.
pub async fn list(
    State(state): State<AppState>,
    cart: CartSession,
) -> AppResult<Json<Vec<CartItemWithProduct>>> {
    let items = CartRepo::list_for_session(&state.pool, &cart.key).await?;

    let product_ids: Vec<DbId> = items.iter().map(|i| i.product_id).collect();
    let mut products: HashMap<DbId, _> = ProductRepo::find_by_ids(&state.pool, &product_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let response = items
        .into_iter()
        .map(|item| CartItemWithProduct {
            product: products.remove(&item.product_id),
            item,
        })
        .collect();

    Ok(Json(response))
}

/// POST /api/cart
///
/// Adding a product already in the cart increases its quantity.
pub async fn add(
    State(state): State<AppState>,
    cart: CartSession,
    ValidatedJson(input): ValidatedJson<AddCartItem>,
) -> AppResult<(StatusCode, Json<CartItem>)> {
    let product = ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product"))?;
    if !product.in_stock {
        return Err(AppError::BadRequest("Product is out of stock".into()));
    }

    let item = CartRepo::add(
        &state.pool,
        &cart.key,
        product.id,
        input.quantity_or_default(),
    )
    .await?;

    tracing::debug!(product_id = product.id, quantity = item.quantity, "Cart item added");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/cart/{id}
pub async fn update(
    State(state): State<AppState>,
    cart: CartSession,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCartItem>,
) -> AppResult<Json<CartItem>> {
    let item = CartRepo::update_quantity(&state.pool, id, &cart.key, input.quantity)
        .await?
        .ok_or_else(|| AppError::not_found("Cart item"))?;
    Ok(Json(item))
}

/// DELETE /api/cart/{id}
pub async fn remove(
    State(state): State<AppState>,
    cart: CartSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CartRepo::remove(&state.pool, id, &cart.key).await? {
        return Err(AppError::not_found("Cart item"));
    }
    Ok(Json(MessageResponse::new("Item removed from cart")))
}

/// DELETE /api/cart
pub async fn clear(
    State(state): State<AppState>,
    cart: CartSession,
) -> AppResult<Json<ClearCartResponse>> {
    let removed = CartRepo::clear(&state.pool, &cart.key).await?;
    tracing::debug!(removed, "Cart cleared");
    Ok(Json(ClearCartResponse {
        message: "Cart cleared".into(),
        removed,
    }))
}
