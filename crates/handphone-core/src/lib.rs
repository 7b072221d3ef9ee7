//! # handphone-core: Pure Storefront Logic for Handphone Shop
//!
//! This crate holds everything the storefront *decides*: which products match
//! a search, what the cart contains, and what each screen should show. It
//! has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Handphone Shop Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (static HTML/JS)                    │   │
//! │  │    Header ──► Product Grid ──► Cart Panel                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    search_products, add_to_cart, update_cart_item, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ handphone-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │   view   │ │   storefront     │  │   │
//! │  │   │ filter   │ │ add/upd/ │ │ card,    │ │ query, loading,  │  │   │
//! │  │   │ fixture  │ │ remove   │ │ panel    │ │ cart visibility  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine)
//! - [`money`] - Whole-unit money and IDR currency formatting
//! - [`catalog`] - Product collection, search filter, sample fixture
//! - [`cart`] - Cart state holder with the `[1, stock]` quantity invariant
//! - [`storefront`] - Root view state (query, loading, cart visibility)
//! - [`view`] - Pure render functions producing view models
//! - [`report`] - Inventory summary for the back office
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use handphone_core::{sample_products, Cart, Catalog};
//!
//! let catalog = Catalog::new(sample_products()).unwrap();
//! let apple = catalog.search("apple");
//! assert_eq!(apple.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add(apple[0]).unwrap();
//! cart.add(apple[0]).unwrap();
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().units(), 2 * 15_999_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod report;
pub mod storefront;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use catalog::{filter_products, matches_query, sample_products, Catalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use storefront::{Storefront, StorefrontEvent};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with fewer units than this (but more than zero) get a
/// "Low Stock" badge.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Image shown when a product image fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg";
