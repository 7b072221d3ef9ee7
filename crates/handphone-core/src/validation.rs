//! # Validation Module
//!
//! Checks applied to product records before they enter a [`crate::Catalog`]
//! and to search input coming from the frontend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (JS)                                                │
//! │  └── Disabled buttons (out of stock, stepper bounds)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: record and query checks                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart (Rust)                                                  │
//! │  └── Quantity kept within [1, stock] on every mutation                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name / brand / model.
pub const MAX_TEXT_FIELD_LEN: usize = 200;

/// Longest accepted search query.
pub const MAX_QUERY_LEN: usize = 100;

/// Highest accepted unit price (one trillion rupiah).
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// Highest accepted stock count.
pub const MAX_STOCK: i64 = 1_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required short text field (name, brand, model).
///
/// ## Example
/// ```rust
/// use handphone_core::validation::validate_text_field;
///
/// assert!(validate_text_field("brand", "Samsung").is_ok());
/// assert!(validate_text_field("brand", "   ").is_err());
/// ```
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates an image reference. Empty is allowed (the card falls back to
/// the default image); anything else must be an http(s) URL.
pub fn validate_image_url(image: &str) -> ValidationResult<()> {
    let image = image.trim();
    if image.is_empty() || image.starts_with("https://") || image.starts_with("http://") {
        return Ok(());
    }

    Err(ValidationError::InvalidFormat {
        field: "image".to_string(),
        reason: "must be an http or https URL".to_string(),
    })
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns the whole catalog)
/// - Maximum 100 characters
///
/// The query is returned untouched; the filter decides how to treat
/// surrounding whitespace.
pub fn validate_search_query(query: &str) -> ValidationResult<&str> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a value that must be zero or positive (price, stock).
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a value against an inclusive upper bound.
pub fn validate_at_most(field: &str, value: i64, max: i64) -> ValidationResult<()> {
    if value > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a whole product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_text_field("name", &product.name)?;
    validate_text_field("brand", &product.brand)?;
    validate_text_field("model", &product.model)?;
    validate_non_negative("price", product.price)?;
    validate_at_most("price", product.price, MAX_PRICE)?;
    validate_non_negative("stock", product.stock)?;
    validate_at_most("stock", product.stock, MAX_STOCK)?;
    validate_image_url(&product.image)?;
    Ok(())
}
