//! # Tauri Commands Module
//!
//! All commands exposed to the storefront page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog loading, search, product lookup
//! ├── cart.rs     ◄─── Cart panel and cart manipulation
//! ├── report.rs   ◄─── Inventory report
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend (dist/main.js)                                                │
//! │  ───────────────────────                                                │
//! │  const view = await invoke('add_to_cart', { productId: 2 });           │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn add_to_cart(                                                        │
//! │      store: State<'_, StorefrontState>,  ◄── Injected by Tauri         │
//! │      cart: State<'_, CartState>,                                        │
//! │      config: State<'_, ConfigState>,                                    │
//! │      product_id: ProductId,              ◄── From invoke params        │
//! │  ) -> Result<StorefrontView, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend re-renders from the returned StorefrontView                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that change what is on screen return the freshly rendered
//! [`StorefrontView`](handphone_core::view::StorefrontView), so the page
//! never has to combine partial responses.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod report;
