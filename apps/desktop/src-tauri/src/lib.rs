//! # Handphone Desktop Library
//!
//! Core library for the Handphone Shop desktop storefront.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! handphone_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── loader.rs         ◄─── Delayed catalog loading (sample or JSON file)
//! ├── state/
//! │   ├── mod.rs        ◄─── State exports + screen render helper
//! │   ├── storefront.rs ◄─── Catalog, query, cart panel flag
//! │   ├── cart.rs       ◄─── Cart state management
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── catalog.rs    ◄─── Load, search, product lookup
//! │   ├── cart.rs       ◄─── Cart panel + cart manipulation
//! │   ├── report.rs     ◄─── Inventory report
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │ StorefrontState  │ │    CartState     │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Products      │ │  • Cart lines    │ │  • Store name        │   │
//! │  │  • Search query  │ │  • Quantities    │ │  • Currency          │   │
//! │  │  • Cart open?    │ │                  │ │  • Load delay        │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod loader;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartState, ConfigState, StorefrontState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,handphone=debug, override with RUST_LOG             │
/// │                                                                         │
/// │  2. Read Configuration ───────────────────────────────────────────────► │
/// │     • HANDPHONE_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • StorefrontState: loading, no products yet                         │
/// │     • CartState: empty cart                                             │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Page calls load_catalog once the window is up                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Handphone Shop");

    tauri::Builder::default()
        .setup(|app| {
            let config = ConfigState::from_env();
            info!(
                store_name = %config.store_name,
                currency = %config.currency.code,
                catalog = ?config.catalog_path,
                "Configuration loaded"
            );

            app.manage(StorefrontState::new());
            app.manage(CartState::new());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::load_catalog,
            commands::catalog::get_storefront,
            commands::catalog::search_products,
            commands::catalog::clear_search,
            commands::catalog::get_product,
            commands::catalog::image_fallback,
            // Cart commands
            commands::cart::open_cart,
            commands::cart::close_cart,
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            commands::cart::checkout,
            // Report commands
            commands::report::get_inventory_report,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=handphone=trace` - Show trace for handphone crates only
/// - Default: INFO, DEBUG for handphone crates
fn init_tracing() {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Default directive when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info,handphone=debug";

/// Builds the log filter from a `RUST_LOG` value.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter() {
        let filter = log_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let unparsable = log_filter(Some("handphone=loud"));
        assert_eq!(unparsable.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = log_filter(Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_subscriber_honours_filter() {
        use tracing::subscriber::with_default;

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(log_filter(Some("error")))
            .finish();
        with_default(subscriber, || {
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
            assert!(!tracing::enabled!(tracing::Level::WARN));
            assert!(tracing::enabled!(tracing::Level::ERROR));
        });
    }
}
