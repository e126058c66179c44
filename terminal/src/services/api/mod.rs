//! # SDK Gateway Client Module
//!
//! HTTP client for communicating with the drop SDK gateway. Handles drop
//! contract reads, claim submission, and wallet session flows.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - SdkClient struct and common functionality
//! ├── drop.rs     - Drop read endpoints (metadata, supply, condition, eligibility)
//! ├── claim.rs    - Claim submission endpoint
//! └── wallet.rs   - Wallet session endpoints (connect, poll, switch network)
//! ```

pub mod claim;
pub mod client;
pub mod drop;
pub mod wallet;

pub use client::SdkClient;
