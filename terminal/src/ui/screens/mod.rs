//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen of the
//! application.
//!
//! - **[`connect`]**: Wallet connection screen with the three connector
//!   entry points (extension, relay, exchange-hosted)
//! - **[`mint`]**: The minting page: drop metadata, quantity selector,
//!   the call-to-action button, and the supply readout
//!
//! Screens are pure render functions over a state snapshot; user actions
//! go back through the [`crate::app::App`] handler facade.

pub mod connect;
pub mod mint;
