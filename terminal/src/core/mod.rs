//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`DropApi`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use mint_terminal::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The [`DropApi`] trait lets tests substitute a mock gateway for the real
//! HTTP client:
//!
//! ```rust,ignore
//! // In production: the real SDK gateway client
//! let api: Arc<dyn DropApi> = Arc::new(SdkClient::new());
//!
//! // In tests: a mock implementation
//! let api: Arc<dyn DropApi> = Arc::new(MockDropApi::default());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::DropApi;
