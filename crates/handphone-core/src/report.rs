//! # Inventory Report
//!
//! Back-office summary of the catalog: one row per product plus stock and
//! value totals. Rendering is plain tab-separated text so it pastes straight
//! into a spreadsheet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

/// Column headers, in row order.
pub const REPORT_COLUMNS: [&str; 8] = [
    "ID",
    "Name",
    "Brand",
    "Model",
    "Price",
    "Stock",
    "Description",
    "Created At",
];

/// A single report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportRow {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub price: Money,
    #[ts(type = "number")]
    pub stock: i64,
    pub description: String,
    pub created_at: String,
}

impl From<&Product> for ReportRow {
    fn from(p: &Product) -> Self {
        ReportRow {
            id: p.id,
            name: p.name.clone(),
            brand: p.brand.clone(),
            model: p.model.clone(),
            price: p.price(),
            stock: p.stock,
            description: p.description.clone(),
            created_at: p.created_at.clone(),
        }
    }
}

/// Catalog inventory summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryReport {
    pub rows: Vec<ReportRow>,
    pub product_count: u32,
    /// Σ stock
    #[ts(type = "number")]
    pub total_units: i64,
    /// Σ price × stock
    pub inventory_value: Money,
    /// Ids with 0 < stock < threshold
    pub low_stock: Vec<ProductId>,
    /// Ids with stock == 0
    pub out_of_stock: Vec<ProductId>,
}

impl InventoryReport {
    /// Summarizes `products` in catalog order.
    pub fn build(products: &[Product], low_stock_threshold: i64) -> Self {
        let mut report = InventoryReport {
            rows: Vec::with_capacity(products.len()),
            product_count: products.len() as u32,
            total_units: 0,
            inventory_value: Money::zero(),
            low_stock: Vec::new(),
            out_of_stock: Vec::new(),
        };

        for product in products {
            report.rows.push(ReportRow::from(product));
            report.total_units = report.total_units.saturating_add(product.stock);
            report.inventory_value += product.price().multiply_quantity(product.stock);

            if product.is_out_of_stock() {
                report.out_of_stock.push(product.id);
            } else if product.is_low_stock(low_stock_threshold) {
                report.low_stock.push(product.id);
            }
        }

        report
    }

    /// Tab-separated table with a header row. Tabs and newlines inside
    /// values are replaced by spaces.
    pub fn to_table(&self) -> String {
        let mut out = REPORT_COLUMNS.join("\t");
        out.push('\n');

        for row in &self.rows {
            let cells = [
                row.id.to_string(),
                clean(&row.name),
                clean(&row.brand),
                clean(&row.model),
                row.price.to_string(),
                row.stock.to_string(),
                clean(&row.description),
                clean(&row.created_at),
            ];
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }

        out
    }

    /// Suggested download name, e.g. `products-report-2024-05-01.tsv`.
    pub fn file_name(date: NaiveDate) -> String {
        format!("products-report-{}.tsv", date.format("%Y-%m-%d"))
    }
}

fn clean(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    #[test]
    fn test_build_totals() {
        let mut products = sample_products();
        products[0].stock = 0;
        products[1].stock = 3;

        let report = InventoryReport::build(&products, 5);
        assert_eq!(report.product_count, 5);
        assert_eq!(report.total_units, 3 + 20 + 15 + 18);
        assert_eq!(
            report.inventory_value.units(),
            18_999_000 * 3 + 12_999_000 * 20 + 13_999_000 * 15 + 11_999_000 * 18
        );
        assert_eq!(report.out_of_stock, vec![1]);
        assert_eq!(report.low_stock, vec![2]);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut products = sample_products();
        products[0].price = 5_000_000_000_000_000_000;
        products[0].stock = 3;

        let report = InventoryReport::build(&products, 5);
        assert_eq!(report.inventory_value.units(), i64::MAX);
    }

    #[test]
    fn test_empty_catalog() {
        let report = InventoryReport::build(&[], 5);
        assert_eq!(report.product_count, 0);
        assert!(report.inventory_value.is_zero());
        assert_eq!(report.to_table().lines().count(), 1);
    }

    #[test]
    fn test_to_table() {
        let mut products = sample_products();
        products.truncate(1);
        products[0].description = "Line one\nline\ttwo".to_string();

        let table = InventoryReport::build(&products, 5).to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "ID\tName\tBrand\tModel\tPrice\tStock\tDescription\tCreated At"
        );
        assert_eq!(
            lines[1],
            "1\tiPhone 15 Pro\tApple\tA3108\t15999000\t25\tLine one line two\t2024-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            InventoryReport::file_name(date),
            "products-report-2024-05-01.tsv"
        );
    }
}
