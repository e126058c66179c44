//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the mint terminal and the
//! drop SDK gateway. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for gateway communication
//!   - **[`dto::drop`]**: Drop contract reads (metadata, supply, claim
//!     conditions, eligibility) and the claim write surface
//!   - **[`dto::wallet`]**: Wallet connector sessions and network switching
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize with default `serde` behavior:
//! - Field names use **snake_case** in Rust, mapping to **snake_case** JSON
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the terminal
//!
//! ```rust
//! use shared::dto::drop::ClaimRequest;
//! use shared::utils::truncate_address;
//!
//! let request = ClaimRequest {
//!     session_id: "sess-1".to_string(),
//!     recipient: "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL".to_string(),
//!     quantity: 1,
//! };
//! let body = serde_json::to_string(&request).unwrap();
//!
//! let display = truncate_address(&request.recipient);
//! assert_eq!(display, "8W6Q...JKAL");
//! # let _ = body;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
