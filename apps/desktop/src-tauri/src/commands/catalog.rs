//! # Catalog Commands
//!
//! Tauri commands for loading the catalog, searching it and looking up a
//! single product.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "sam" in the header                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('search_products', { query: 'sam' })                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_search_query (≤ 100 chars)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorefrontEvent::SearchChanged { query }                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render: "Search Results (1)" + Samsung Galaxy S24 Ultra card          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use handphone_core::validation::validate_search_query;
use handphone_core::view::{ImageView, StorefrontView};
use handphone_core::{CoreError, Product, ProductId, StorefrontEvent};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::loader;
use crate::state::{self, CartState, ConfigState, StorefrontState};

/// Loads the catalog and leaves the loading state.
///
/// Waits `HANDPHONE_LOAD_DELAY_MS` first (1 second by default). Calling it
/// again reloads the catalog; the cart is left alone.
#[tauri::command]
pub async fn load_catalog(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> Result<StorefrontView, ApiError> {
    debug!("load_catalog command");
    let start = Instant::now();

    let catalog = loader::load_catalog(&config).await?;
    let count = catalog.len();
    store.with_store_mut(|s| s.finish_loading(catalog.into_products()));

    info!(
        products = count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Catalog loaded"
    );

    Ok(state::render(&store, &cart, &config))
}

/// Renders the current screen without changing anything.
#[tauri::command]
pub fn get_storefront(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> StorefrontView {
    debug!("get_storefront command");
    state::render(&store, &cart, &config)
}

/// Replaces the search query.
///
/// ## Arguments
/// * `query` - Raw text from the search box; blank shows every product
#[tauri::command]
pub fn search_products(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
    query: String,
) -> Result<StorefrontView, ApiError> {
    debug!(query = %query, "search_products command");

    set_query(&store, query)?;
    Ok(state::render(&store, &cart, &config))
}

/// Clears the search query ("Clear Search" button).
#[tauri::command]
pub fn clear_search(
    store: State<'_, StorefrontState>,
    cart: State<'_, CartState>,
    config: State<'_, ConfigState>,
) -> StorefrontView {
    debug!("clear_search command");
    store.apply(StorefrontEvent::ClearSearch);
    state::render(&store, &cart, &config)
}

/// Gets a single product by id.
#[tauri::command]
pub fn get_product(store: State<'_, StorefrontState>, id: ProductId) -> Result<Product, ApiError> {
    debug!(id, "get_product command");
    find_product(&store, id)
}

/// Handles an `<img>` load error reported by the page.
///
/// Returns the image to show next: the fallback on the first error, the
/// same image once the fallback itself has failed.
#[tauri::command]
pub fn image_fallback(image: ImageView) -> ImageView {
    debug!(src = %image.src, "image_fallback command");
    next_image(image)
}

fn next_image(mut image: ImageView) -> ImageView {
    if image.on_error() {
        debug!(alt = %image.alt, "Switched to fallback image");
    }
    image
}

fn set_query(store: &StorefrontState, query: String) -> Result<(), ApiError> {
    validate_search_query(&query).map_err(|e| ApiError::validation(e.to_string()))?;
    store.apply(StorefrontEvent::SearchChanged { query });
    Ok(())
}

/// Copies a product out of the loaded catalog.
pub(crate) fn find_product(store: &StorefrontState, id: ProductId) -> Result<Product, ApiError> {
    store
        .with_store(|s| s.product(id).cloned())
        .ok_or_else(|| ApiError::from(CoreError::ProductNotFound(id)))
}
