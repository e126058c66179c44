//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::dto::drop::{ClaimCondition, ClaimResponse, ContractMetadata, IneligibilityReason, SupplyCounts};

use crate::app::state::NoticeLevel;
use crate::services::wallet::WalletSession;

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Connector flow finished
    SessionResult(Result<WalletSession, String>),
    /// Contract metadata refreshed
    MetadataResult(Result<ContractMetadata, String>),
    /// Supply counts refreshed
    SupplyResult(Result<SupplyCounts, String>),
    /// Active claim condition refreshed; `Ok(None)` means no live phase
    ConditionResult(Result<Option<ClaimCondition>, String>),
    /// Eligibility refreshed for a specific (address, quantity) pair;
    /// results for a stale pair are dropped on receipt
    EligibilityResult {
        address: String,
        quantity: u64,
        result: Result<Vec<IneligibilityReason>, String>,
    },
    /// Network switch request finished
    NetworkSwitchResult(Result<WalletSession, String>),
    /// Claim submission finished
    ClaimResult(Result<ClaimResponse, String>),
    /// Free-form notice for the toast stack
    Notice(NoticeLevel, String),
}
