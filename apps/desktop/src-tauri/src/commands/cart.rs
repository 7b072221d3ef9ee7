//! # Cart Commands
//!
//! Tauri commands for the cart panel and cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────────────┐            │
//! │  │  Empty   │────►│ In Cart  │────►│  Checkout            │            │
//! │  │  Cart    │     │          │     │  (not available yet) │            │
//! │  └──────────┘     └──────────┘     └──────────────────────┘            │
//! │                        │                                                │
//! │                   add_to_cart        quantity stays in [1, stock]      │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use handphone_core::view::StorefrontView;
use handphone_core::{ProductId, StorefrontEvent};
use tauri::State;
use tracing::{debug, info};

use super::catalog::find_product;
use crate::error::ApiError;
use crate::state::{self, CartSnapshot, CartState, ConfigState, StorefrontState};

/// Gets the current cart contents and totals.
///
/// ## Returns
/// `{ lines: [...], totals: { lineCount, totalItems, totalPrice } }`
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartSnapshot {
    debug!("get_cart command");
    cart.with_cart(|c| CartSnapshot::from(c))
}

/// Opens the cart panel (cart icon in the header).
#[tauri::command]
pub fn open_cart(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> StorefrontView {
    debug!("open_cart command");
    store.apply(StorefrontEvent::OpenCart);
    state::render(&store, &cart, &config)
}

/// Closes the cart panel (close button or backdrop click).
#[tauri::command]
pub fn close_cart(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> StorefrontView {
    debug!("close_cart command");
    store.apply(StorefrontEvent::CloseCart);
    state::render(&store, &cart, &config)
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Not in cart yet: new line with quantity 1
/// - Already in cart: quantity + 1
/// - Out of stock, or line already at stock: error, cart unchanged
///
/// ## Arguments
/// * `product_id` - Catalog id of the product
#[tauri::command]
pub fn add_to_cart(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
    product_id: ProductId,
) -> Result<StorefrontView, ApiError> {
    debug!(product_id, "add_to_cart command");

    add_product(&store, &cart, product_id)?;
    Ok(state::render(&store, &cart, &config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - The stored quantity is clamped to `[1, stock]`
/// - The line is never removed here; use `remove_from_cart`
///
/// ## Arguments
/// * `product_id` - Product in the cart
/// * `quantity` - Requested quantity
#[tauri::command]
pub fn update_cart_item(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
    product_id: ProductId,
    quantity: i64,
) -> Result<StorefrontView, ApiError> {
    debug!(product_id, quantity, "update_cart_item command");

    let stored = cart.with_cart_mut(|c| c.update(product_id, quantity))?;
    if stored != quantity {
        debug!(product_id, requested = quantity, stored, "Quantity clamped");
    }

    Ok(state::render(&store, &cart, &config))
}

/// Removes a product's line from the cart.
#[tauri::command]
pub fn remove_from_cart(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
    product_id: ProductId,
) -> Result<StorefrontView, ApiError> {
    debug!(product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| c.remove(product_id))?;
    Ok(state::render(&store, &cart, &config))
}

/// Empties the cart.
#[tauri::command]
pub fn clear_cart(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> StorefrontView {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| c.clear());
    state::render(&store, &cart, &config)
}

/// "Proceed to Checkout" button.
///
/// There is no payment flow; this always fails with a cart error and the
/// cart is left as it was.
#[tauri::command]
pub fn checkout(cart: State<'_, CartState>) -> Result<StorefrontView, ApiError> {
    debug!("checkout command");
    Err(refuse_checkout(&cart))
}

fn refuse_checkout(cart: &CartState) -> ApiError {
    let items = cart.with_cart(|c| c.total_items());
    info!(items, "Checkout requested");
    ApiError::cart("Checkout is not available yet")
}

fn add_product(
    store: &StorefrontState,
    cart: &CartState,
    product_id: ProductId,
) -> Result<i64, ApiError> {
    let product = find_product(store, product_id)?;
    let quantity = cart.with_cart_mut(|c| c.add(&product))?;
    Ok(quantity)
}
