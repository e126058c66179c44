//! # Services Module
//!
//! External service integrations for the mint terminal. This module
//! provides clients and utilities for communicating with the drop SDK
//! gateway.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/       - SDK gateway HTTP client
//! │                (drop reads, claim submission, wallet sessions)
//! ├── query.rs   - Request/response cache with TTL + de-duplication
//! └── wallet.rs  - Wallet session service (connector flows)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Mint Terminal                        │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐       │
//! │  │  SdkClient       │       │  WalletService   │       │
//! │  │  (api/)          │       │  (wallet.rs)     │       │
//! │  └────────┬─────────┘       └────────┬─────────┘       │
//! │           │                          │                 │
//! └───────────┼──────────────────────────┼─────────────────┘
//! │           │ HTTP/JSON                │ HTTP/JSON
//!             ▼                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Drop SDK Gateway                        │
//! │                                                         │
//! │  /api/drop/{contract}/*    - contract reads + claim    │
//! │  /api/wallet/*             - connector auth flows      │
//! │                                                         │
//! │  (chain RPC, wallet protocols, transaction assembly    │
//! │   and signing all live behind this boundary)           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! The API modules return `Result<T, String>` with user-facing messages:
//! network errors as "Network error: {details}", parse errors as
//! "Failed to parse response: {details}", and gateway errors extracted
//! from the `ErrorResponse` body where the endpoint provides one. The
//! wallet service wraps those into [`wallet::WalletError`].
//!
//! ## Thread Safety
//!
//! - **SdkClient**: wraps `reqwest::Client` (internally thread-safe);
//!   shared across tasks as `Arc<dyn DropApi>`.
//! - **RequestCache**: `parking_lot::Mutex` around the entry map; locks
//!   are never held across awaits.
//! - **WalletService**: stateless over its `Arc<dyn DropApi>`; each
//!   connector flow runs in its own task.

pub mod api;
pub mod query;
pub mod wallet;
