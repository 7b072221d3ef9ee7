//! # Handphone Shop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Handphone Shop Desktop                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  dist/index.html + main.js                                       │  │
//! │  │  • Header + search        • Product grid                         │  │
//! │  │  • Cart panel             • Image fallback                       │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                            │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  lib.rs ─────► logging, state, command registration             │  │
//! │  │  commands/ ──► load_catalog, search_products, add_to_cart       │  │
//! │  │  state/ ─────► StorefrontState, CartState, ConfigState          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  handphone-core: catalog filter, cart rules, view models         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    handphone_desktop_lib::run();
}
