//! # Event Handlers
//!
//! User-action handlers organized by domain. Each handler snapshots what
//! it needs under a short lock, then hands the slow part to a task.

pub mod mint;
pub mod wallet;
