//! # Catalog
//!
//! The product collection shown in the storefront, the search filter over it,
//! and the built-in sample fixture.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Filter                                       │
//! │                                                                         │
//! │  User types "SAMSUNG"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Query blank after trim? ── yes ──► whole catalog, original order      │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  Lowercase query, keep products where                                  │
//! │    name ∪ brand ∪ model contains it                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [Samsung Galaxy S24 Ultra]   (catalog order, no ranking)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

// =============================================================================
// Filter
// =============================================================================

/// Case-insensitive substring match on name, brand or model.
///
/// `query` is matched as given (no trimming); callers that want the blank
/// query shortcut use [`filter_products`].
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&product.name, &product.brand, &product.model]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns the products matching `query`, in their original order.
///
/// A query that is empty or only whitespace returns every product.
///
/// ## Example
/// ```rust
/// use handphone_core::{filter_products, sample_products};
///
/// let products = sample_products();
/// assert_eq!(filter_products(&products, "").len(), products.len());
/// assert_eq!(filter_products(&products, "ultra").len(), 2);
/// ```
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| matches_query(product, query))
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered product collection with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every record.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for the first invalid record
    /// - `CoreError::DuplicateProduct` when two records share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProduct(product.id));
            }
        }
        Ok(Catalog { products })
    }

    /// Parses a JSON array of product records.
    ///
    /// ## Example
    /// ```rust
    /// use handphone_core::Catalog;
    ///
    /// let json = r#"[{"id": 1, "name": "Nokia 3310", "brand": "Nokia",
    ///                 "model": "TA-1030", "price": 799000, "stock": 4}]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            List(Vec<Product>),
            Wrapped { products: Vec<Product> },
        }

        let products = match serde_json::from_str::<Document>(json)? {
            Document::List(products) | Document::Wrapped { products } => products,
        };
        Catalog::new(products)
    }

    /// The built-in five phone fixture.
    pub fn sample() -> Self {
        Catalog {
            products: sample_products(),
        }
    }

    /// All products, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consumes the catalog, returning its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `query` (see [`filter_products`]).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        filter_products(&self.products, query)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Sample Fixture
// =============================================================================

const SAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// (name, brand, model, price, stock, description, image)
const SAMPLE_PHONES: &[(&str, &str, &str, i64, i64, &str, &str)] = &[
    (
        "iPhone 15 Pro",
        "Apple",
        "A3108",
        15_999_000,
        25,
        "Latest iPhone with titanium design and A17 Pro chip",
        "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg",
    ),
    (
        "Samsung Galaxy S24 Ultra",
        "Samsung",
        "SM-S928B",
        18_999_000,
        30,
        "Premium Android flagship with S Pen and 200MP camera",
        "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg",
    ),
    (
        "Xiaomi 14 Ultra",
        "Xiaomi",
        "2405CPX3DG",
        12_999_000,
        20,
        "Photography-focused flagship with Leica cameras",
        "https://images.pexels.com/photos/1275229/pexels-photo-1275229.jpeg",
    ),
    (
        "Google Pixel 8 Pro",
        "Google",
        "GC3VE",
        13_999_000,
        15,
        "AI-powered smartphone with pure Android experience",
        "https://images.pexels.com/photos/1207583/pexels-photo-1207583.jpeg",
    ),
    (
        "OnePlus 12",
        "OnePlus",
        "CPH2573",
        11_999_000,
        18,
        "Fast charging flagship with OxygenOS",
        "https://images.pexels.com/photos/1279107/pexels-photo-1279107.jpeg",
    ),
];

/// The sample phones, with ids 1..=5 in display order.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PHONES
        .iter()
        .zip(1..)
        .map(
            |(&(name, brand, model, price, stock, description, image), id)| Product {
                id,
                name: name.to_string(),
                brand: brand.to_string(),
                model: model.to_string(),
                price,
                stock,
                description: description.to_string(),
                image: image.to_string(),
                created_at: SAMPLE_TIMESTAMP.to_string(),
                updated_at: SAMPLE_TIMESTAMP.to_string(),
            },
        )
        .collect()
}
