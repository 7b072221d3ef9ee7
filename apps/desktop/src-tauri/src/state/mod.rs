//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! Separate state types instead of one `AppState`, so each command declares
//! exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(StorefrontState::new());                            │   │
//! │  │  app.manage(CartState::new());                                  │   │
//! │  │  app.manage(ConfigState::from_env());                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌──────────────────┐          │
//! │  │ StorefrontState  │  │  CartState   │  │   ConfigState    │          │
//! │  │                  │  │              │  │                  │          │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<  │  │  store_name      │          │
//! │  │    Storefront    │  │    Cart      │  │  currency        │          │
//! │  │  >>              │  │  >>          │  │  load delay      │          │
//! │  └──────────────────┘  └──────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  LOCK ORDER: StorefrontState before CartState, never the reverse.      │
//! │  ConfigState is read-only after initialization.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod storefront;

pub use cart::{CartSnapshot, CartState};
pub use config::ConfigState;
pub use storefront::StorefrontState;

use handphone_core::view::{render_storefront, StorefrontView};

/// Renders the whole screen from the current state.
///
/// Takes the storefront lock, then the cart lock.
pub fn render(
    store: &StorefrontState,
    cart: &CartState,
    config: &ConfigState,
) -> StorefrontView {
    let view_config = config.view_config();
    store.with_store(|s| {
        cart.with_cart(|c| render_storefront(s, c, &config.store_name, &view_config))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use handphone_core::sample_products;

    #[test]
    fn test_render_follows_state() {
        let store = StorefrontState::new();
        let cart = CartState::new();
        let config = ConfigState::default();

        assert!(matches!(
            render(&store, &cart, &config),
            StorefrontView::Loading { .. }
        ));

        let products = sample_products();
        store.with_store_mut(|s| s.finish_loading(products.clone()));
        cart.with_cart_mut(|c| c.add(&products[2])).unwrap();

        match render(&store, &cart, &config) {
            StorefrontView::Ready(page) => {
                assert_eq!(page.header.store_name, "Handphone Shop");
                assert_eq!(page.header.cart_items_count, 1);
                assert_eq!(page.cards.len(), 5);
                assert!(page.cart.is_none());
            }
            other => panic!("expected a ready page, got {other:?}"),
        }
    }
}
