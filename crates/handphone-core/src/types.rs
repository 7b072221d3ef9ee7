//! # Domain Types
//!
//! The two entities the storefront works with.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │      Product        │            │      CartLine       │            │
//! │  │  ─────────────────  │  snapshot  │  ─────────────────  │            │
//! │  │  id (u32)           │◄───────────│  product            │            │
//! │  │  name, brand, model │            │  quantity           │            │
//! │  │  price (whole IDR)  │            │  added_at           │            │
//! │  │  stock              │            └─────────────────────┘            │
//! │  │  description, image │                                                │
//! │  │  created/updated_at │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once loaded. Timestamps are carried as opaque
//! strings and never interpreted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Numeric product identifier, unique within a catalog.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A phone available in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name, e.g. "iPhone 15 Pro".
    pub name: String,

    /// Manufacturer, e.g. "Apple".
    pub brand: String,

    /// Manufacturer model code, e.g. "A3108".
    pub model: String,

    /// Price in whole currency units (no minor unit).
    #[ts(type = "number")]
    pub price: i64,

    /// Units available. Never negative.
    #[ts(type = "number")]
    pub stock: i64,

    /// Marketing copy shown on the card.
    #[serde(default)]
    pub description: String,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Opaque creation timestamp.
    #[serde(default)]
    pub created_at: String,

    /// Opaque update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }

    /// No units left.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// In stock, but fewer than `threshold` units.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock > 0 && self.stock < threshold
    }

    /// Checks if `quantity` units can be put in a cart.
    pub fn can_hold(&self, quantity: i64) -> bool {
        quantity >= 1 && quantity <= self.stock
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product-quantity pairing within the cart.
///
/// ## Design Notes
/// - `product`: snapshot of the product taken when it was first added, so the
///   cart keeps rendering the same name/price even if the catalog is reloaded.
/// - `quantity`: always within `1..=product.stock` (enforced by [`crate::Cart`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product: Product,

    #[ts(type = "number")]
    pub quantity: i64,

    /// When this line was created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line holding a single unit of `product`.
    pub fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Identifier of the product on this line.
    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}
