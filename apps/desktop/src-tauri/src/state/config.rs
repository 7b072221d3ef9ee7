//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HANDPHONE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use handphone_core::view::ViewConfig;
use handphone_core::{CurrencyFormat, DEFAULT_LOW_STOCK_THRESHOLD, FALLBACK_IMAGE_URL};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency used for every price
    pub currency: CurrencyFormat,

    /// Stock below this (and above zero) gets a "Low Stock" badge
    pub low_stock_threshold: i64,

    /// Image substituted when a product image fails to load
    pub fallback_image: String,

    /// Simulated delay before the catalog appears
    pub load_delay_ms: u64,

    /// JSON catalog to load instead of the built-in sample phones
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Handphone Shop"
    /// - Currency: IDR (Rp), no fraction digits
    /// - Low stock below 5 units
    /// - 1 second catalog delay, built-in sample catalog
    fn default() -> Self {
        ConfigState {
            store_name: "Handphone Shop".to_string(),
            currency: CurrencyFormat::idr(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            fallback_image: FALLBACK_IMAGE_URL.to_string(),
            load_delay_ms: 1000,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `HANDPHONE_STORE_NAME`: Override store name
    /// - `HANDPHONE_CURRENCY_CODE` / `HANDPHONE_CURRENCY_SYMBOL`: Override currency
    /// - `HANDPHONE_LOW_STOCK_THRESHOLD`: e.g. "3"
    /// - `HANDPHONE_LOAD_DELAY_MS`: e.g. "0" to skip the delay
    /// - `HANDPHONE_CATALOG_PATH`: JSON catalog file
    /// - `HANDPHONE_FALLBACK_IMAGE`: fallback image URL
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("HANDPHONE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("HANDPHONE_CURRENCY_CODE") {
            config.currency.code = code;
        }

        if let Some(symbol) = lookup("HANDPHONE_CURRENCY_SYMBOL") {
            config.currency.symbol = symbol;
        }

        if let Some(raw) = lookup("HANDPHONE_LOW_STOCK_THRESHOLD") {
            match raw.parse::<i64>() {
                Ok(threshold) if threshold >= 0 => config.low_stock_threshold = threshold,
                _ => warn!(value = %raw, "Ignoring invalid HANDPHONE_LOW_STOCK_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("HANDPHONE_LOAD_DELAY_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.load_delay_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid HANDPHONE_LOAD_DELAY_MS"),
            }
        }

        if let Some(path) = lookup("HANDPHONE_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(image) = lookup("HANDPHONE_FALLBACK_IMAGE") {
            config.fallback_image = image;
        }

        config
    }

    /// Render settings for `handphone_core::view`.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            currency: self.currency.clone(),
            low_stock_threshold: self.low_stock_threshold,
            fallback_image: self.fallback_image.clone(),
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
