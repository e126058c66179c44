//! # Async Tasks
//!
//! Async task spawning for drop reads and claim submission. Tasks talk to
//! the SDK gateway off the render thread and report back through the
//! event channel.

pub mod claim;
pub mod drop;
