//! # NFT Drop Mint Terminal - Library Root
//!
//! A **native desktop minting interface** for an NFT drop contract. This
//! library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │            mint-terminal (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui/eframe  - Immediate-mode GUI, native window      │
//! │  Tokio        - Async runtime                          │
//! │  Reqwest      - HTTP client                            │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP/JSON
//!                          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Drop SDK Gateway                                      │
//! │  (claim conditions, supply, eligibility, wallet        │
//! │   connector protocols, transaction assembly/signing)   │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, handlers, and async tasks
//!   - Event-driven orchestrator: tasks send `AppEvent`s, the frame loop
//!     folds them into `Arc<RwLock<AppState>>`
//! - **mint**: Pure derived state: eligibility flags, quantity bounds,
//!   price units, ineligibility text, button labels
//! - **services**: External integrations
//!   - `api`: SDK gateway HTTP client
//!   - `query`: Request/response cache (TTL + in-flight de-duplication)
//!   - `wallet`: Wallet session service (connector flows)
//! - **ui**: Rendering (screens, widgets, theme)
//! - **utils**: Tokio runtime bridge, input validation
//! - **debug**: Logging initialization
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! - Main thread: input handling and rendering (single-threaded egui)
//! - Async tasks: gateway I/O on the Tokio runtime
//! - Results flow back over an unbounded `async_channel` as [`AppEvent`]s
//!
//! ### State Management
//!
//! Application state lives in `Arc<RwLock<AppState>>` (parking_lot):
//! multiple readers, exclusive writers, locks held briefly and never
//! across awaits.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! Async paths are tested against mock [`core::DropApi`] implementations;
//! the derived-state modules are plain functions with unit tests beside
//! them.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod mint;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
