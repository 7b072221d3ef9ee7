//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Handphone Shop                         │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_to_cart')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart rule broken? ─── CoreError::OutOfStock ──────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Catalog file bad? ─── LoadError::Io ──────────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { e.code === 'OUT_OF_STOCK' ... }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires command errors to be serializable, so `ApiError` carries
//! a machine-readable `code` and a human-readable `message`.

use handphone_core::CoreError;
use serde::Serialize;

use crate::loader::LoadError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id unknown to the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed (e.g. product not in cart, checkout)
    CartError,

    /// Adding would exceed stock
    InsufficientStock,

    /// Product has no stock at all
    OutOfStock,

    /// The catalog could not be loaded or is still loading
    CatalogError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CatalogError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::NotInCart(_) => ErrorCode::CartError,
            CoreError::OutOfStock { .. } => ErrorCode::OutOfStock,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::DuplicateProduct(_) | CoreError::InvalidCatalog(_) => {
                ErrorCode::CatalogError
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts catalog loading errors to API errors.
impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Catalog(core) => {
                tracing::error!("Catalog rejected: {}", core);
                ApiError::from(core)
            }
            io => {
                tracing::error!("Catalog load failed: {}", io);
                ApiError::catalog(io.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use handphone_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err = ApiError::from(CoreError::ProductNotFound(42));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        let err = ApiError::from(CoreError::OutOfStock {
            product_id: 1,
            name: "iPhone 15 Pro".to_string(),
        });
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(err.message, "iPhone 15 Pro is out of stock");

        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_load_error_codes() {
        let err = ApiError::from(LoadError::Io {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.code, ErrorCode::CatalogError);

        let err = ApiError::from(LoadError::Catalog(CoreError::DuplicateProduct(3)));
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::cart("Checkout is not available yet");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CART_ERROR");
        assert_eq!(json["message"], "Checkout is not available yet");
    }
}
