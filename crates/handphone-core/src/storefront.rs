//! # Storefront State
//!
//! The root view's state: the loaded products, the search query, whether the
//! cart panel is open, and whether the catalog is still loading. The filtered
//! product list is always derived, never stored.
//!
//! ```text
//! Storefront::loading()          loading = true, products = []
//!        │
//!        │ finish_loading(products)
//!        ▼
//! ┌──────────────────────────────────────────────┐
//! │ products, query, cart_open                   │◄── apply(StorefrontEvent)
//! │ filtered() = filter_products(products, query)│
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::filter_products;
use crate::types::{Product, ProductId};

/// User interactions owned by the root view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum StorefrontEvent {
    /// Keystroke in the header search box.
    SearchChanged { query: String },
    /// "Clear Search" button.
    ClearSearch,
    /// Cart icon in the header.
    OpenCart,
    /// Close button or backdrop click on the cart panel.
    CloseCart,
}

/// Root view state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    products: Vec<Product>,
    query: String,
    cart_open: bool,
    loading: bool,
}

impl Storefront {
    /// State before the catalog has arrived.
    pub fn loading() -> Self {
        Storefront {
            loading: true,
            ..Default::default()
        }
    }

    /// State with the catalog already present.
    pub fn with_products(products: Vec<Product>) -> Self {
        Storefront {
            products,
            ..Default::default()
        }
    }

    /// Stores the loaded catalog and leaves the loading state.
    pub fn finish_loading(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
    }

    /// Applies a user interaction.
    pub fn apply(&mut self, event: StorefrontEvent) {
        match event {
            StorefrontEvent::SearchChanged { query } => self.query = query,
            StorefrontEvent::ClearSearch => self.query.clear(),
            StorefrontEvent::OpenCart => self.cart_open = true,
            StorefrontEvent::CloseCart => self.cart_open = false,
        }
    }

    /// Products matching the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.query)
    }

    /// Whether any query text is present.
    ///
    /// Whitespace counts here (title and "Clear Search" follow the raw
    /// input) even though the filter treats it as empty.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    #[test]
    fn test_loading_lifecycle() {
        let mut store = Storefront::loading();
        assert!(store.is_loading());
        assert!(store.filtered().is_empty());

        store.finish_loading(sample_products());
        assert!(!store.is_loading());
        assert_eq!(store.filtered().len(), 5);
    }

    #[test]
    fn test_search_and_clear() {
        let mut store = Storefront::with_products(sample_products());

        store.apply(StorefrontEvent::SearchChanged {
            query: "Galaxy".to_string(),
        });
        assert!(store.has_query());
        assert_eq!(store.filtered().len(), 1);

        store.apply(StorefrontEvent::ClearSearch);
        assert_eq!(store.query(), "");
        assert!(!store.has_query());
        assert_eq!(store.filtered().len(), 5);
    }

    #[test]
    fn test_whitespace_query_is_active_but_matches_everything() {
        let mut store = Storefront::with_products(sample_products());
        store.apply(StorefrontEvent::SearchChanged {
            query: "  ".to_string(),
        });
        assert!(store.has_query());
        assert_eq!(store.filtered().len(), 5);
    }

    #[test]
    fn test_cart_visibility() {
        let mut store = Storefront::default();
        assert!(!store.is_cart_open());
        store.apply(StorefrontEvent::OpenCart);
        assert!(store.is_cart_open());
        store.apply(StorefrontEvent::CloseCart);
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_event_json_shape() {
        let event: StorefrontEvent =
            serde_json::from_str(r#"{"type": "searchChanged", "query": "pixel"}"#).unwrap();
        assert_eq!(
            event,
            StorefrontEvent::SearchChanged {
                query: "pixel".to_string()
            }
        );
    }
}
