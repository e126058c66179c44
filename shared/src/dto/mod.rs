//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the mint terminal and the drop SDK gateway via its REST API.
//!
//! ## Module Organization
//!
//! - [`drop`] - Drop contract metadata, supply, claim conditions,
//!   eligibility reasons, and the claim request/response pair
//! - [`wallet`] - Wallet connector sessions, clusters, network switching
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None`
//! - **Reason codes**: SCREAMING_SNAKE_CASE strings on the wire
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/drop/{contract}/claim
//! Content-Type: application/json
//!
//! {
//!   "session_id": "3f6a...",
//!   "recipient": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
//!   "quantity": 2
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "transaction_signature": "5UfDu...kq2"
//! }
//! ```

pub mod drop;
pub mod wallet;

pub use drop::*;
pub use wallet::*;
