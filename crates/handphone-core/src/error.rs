//! # Error Types
//!
//! Domain-specific error types for handphone-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  handphone-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog and cart rule violations               │
//! │  └── ValidationError  - Product record / input validation failures     │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart has no line for this product.
    ///
    /// ## When This Occurs
    /// - Updating or removing a product that was never added
    /// - A second remove for the same product
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// The product has no stock at all.
    #[error("{name} is out of stock")]
    OutOfStock { product_id: ProductId, name: String },

    /// Adding one more unit would exceed the product's stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart line: Pixel 8 Pro × 15 (stock 15)
    ///      │
    ///      ▼
    /// add(Pixel 8 Pro)
    ///      │
    ///      ▼
    /// InsufficientStock { available: 15, requested: 16 }
    ///      │
    ///      ▼
    /// Cart unchanged, UI shows "Only 15 Google Pixel 8 Pro in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Two catalog records share an id.
    #[error("Duplicate product id {0} in catalog")]
    DuplicateProduct(ProductId),

    /// The catalog document could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidCatalog(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is above its upper bound.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., image that is not a URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 8 Pro".to_string(),
            available: 15,
            requested: 16,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Google Pixel 8 Pro: available 15, requested 16"
        );

        assert_eq!(
            CoreError::NotInCart(7).to_string(),
            "Product 7 is not in the cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "brand".to_string(),
        };
        assert_eq!(err.to_string(), "brand is required");

        let err = ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_becomes_invalid_catalog() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let core_err: CoreError = err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
