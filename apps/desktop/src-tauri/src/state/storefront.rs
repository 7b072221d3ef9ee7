//! # Storefront State
//!
//! Tauri-managed wrapper around [`handphone_core::Storefront`]: the loaded
//! catalog, the search query, and whether the cart panel is open.
//!
//! Starts in the loading state; `load_catalog` swaps in the products.

use std::sync::{Arc, Mutex, MutexGuard};

use handphone_core::{Storefront, StorefrontEvent};

/// Tauri-managed storefront state.
#[derive(Debug)]
pub struct StorefrontState {
    store: Arc<Mutex<Storefront>>,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new()
    }
}

impl StorefrontState {
    /// Creates the state in "Loading products..." mode.
    pub fn new() -> Self {
        StorefrontState {
            store: Arc::new(Mutex::new(Storefront::loading())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Storefront> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Executes a function with read access to the storefront.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Storefront) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the storefront.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Storefront) -> R,
    {
        f(&mut self.lock())
    }

    /// Shorthand for `with_store_mut(|s| s.apply(event))`.
    pub fn apply(&self, event: StorefrontEvent) {
        self.with_store_mut(|store| store.apply(event));
    }
}
