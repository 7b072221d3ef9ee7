//! # Report Commands
//!
//! Inventory report over the loaded catalog.

use chrono::Local;
use handphone_core::report::InventoryReport;
use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, StorefrontState};

/// Report plus its tab-separated rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReportResponse {
    pub report: InventoryReport,
    /// Header row plus one row per product
    pub table: String,
    /// e.g. `products-report-2024-05-01.tsv`
    pub file_name: String,
}

/// Builds the inventory report for the current catalog.
///
/// Fails while the catalog is still loading.
#[tauri::command]
pub fn get_inventory_report(
    store: State<'_, StorefrontState>,
    config: State<'_, ConfigState>,
) -> Result<InventoryReportResponse, ApiError> {
    debug!("get_inventory_report command");
    build_report(&store, &config)
}

fn build_report(
    store: &StorefrontState,
    config: &ConfigState,
) -> Result<InventoryReportResponse, ApiError> {
    let report = store.with_store(|s| {
        if s.is_loading() {
            return Err(ApiError::catalog("Catalog is still loading"));
        }
        Ok(InventoryReport::build(s.products(), config.low_stock_threshold))
    })?;

    Ok(InventoryReportResponse {
        table: report.to_table(),
        file_name: InventoryReport::file_name(Local::now().date_naive()),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use handphone_core::sample_products;

    #[test]
    fn test_report_needs_catalog() {
        let store = StorefrontState::new();
        let err = build_report(&store, &ConfigState::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_report_uses_threshold() {
        let store = StorefrontState::new();
        let mut products = sample_products();
        products[4].stock = 7;
        store.with_store_mut(|s| s.finish_loading(products));

        let config = ConfigState {
            low_stock_threshold: 10,
            ..ConfigState::default()
        };
        let response = build_report(&store, &config).unwrap();

        assert_eq!(response.report.product_count, 5);
        assert_eq!(response.report.low_stock, vec![5]);
        assert_eq!(response.table.lines().count(), 6);
        assert!(response.file_name.starts_with("products-report-"));
        assert!(response.file_name.ends_with(".tsv"));
    }
}
