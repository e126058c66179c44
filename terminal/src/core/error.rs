//! # Common Error Types
//!
//! Consolidated error handling for the mint terminal.
//!
//! This module provides a centralized error type [`AppError`] covering all
//! error scenarios in the application. Errors are categorized by source:
//!
//! - **Api**: SDK gateway communication errors (network, HTTP, JSON parsing)
//! - **Wallet**: Wallet session operations (connector flows, network switch)
//! - **State**: Application state management errors
//! - **Validation**: Input validation errors (invalid address, bad quantity)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use mint_terminal::core::error::AppError;
//!
//! fn validate_quantity(quantity: u64) -> Result<u64, AppError> {
//!     if quantity == 0 {
//!         return Err(AppError::Validation("Quantity must be at least 1".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! Common error types automatically convert to `AppError`:
//!
//! - `String` / `&str` → `AppError::Api`
//! - `WalletError` → `AppError::Wallet`

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the terminal.
///
/// Each variant carries a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides the `Display` and `Error`
/// implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// SDK gateway communication error: network failures, HTTP 4xx/5xx
    /// statuses, or malformed JSON responses.
    #[error("API error: {0}")]
    Api(String),

    /// Wallet session error: connector flow failures, rejected
    /// connections, or network-switch problems.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Application state management error: invalid transitions or state
    /// that should be unreachable.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error: malformed addresses, out-of-range
    /// quantities, missing required fields.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use mint_terminal::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<crate::services::wallet::WalletError> for AppError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wallet::WalletError;

    #[test]
    fn test_display_includes_category() {
        assert_eq!(
            AppError::Api("Connection timeout".to_string()).to_string(),
            "API error: Connection timeout"
        );
        assert_eq!(
            AppError::Validation("Quantity must be at least 1".to_string()).to_string(),
            "Validation error: Quantity must be at least 1"
        );
    }

    #[test]
    fn test_conversions() {
        let err: AppError = "gateway unreachable".into();
        assert!(matches!(err, AppError::Api(_)));

        let err: AppError = WalletError::Timeout.into();
        assert_eq!(
            err.to_string(),
            "Wallet error: connection timed out waiting for wallet approval"
        );
    }
}
