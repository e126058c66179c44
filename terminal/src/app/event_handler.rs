//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! This module processes `AppEvent` messages received from async tasks
//! (gateway reads, connector flows, claim submissions) and folds them into
//! the application state in a thread-safe manner.

use shared::dto::drop::{ClaimCondition, ClaimResponse, ContractMetadata, IneligibilityReason, SupplyCounts};
use shared::utils::truncate_address;

use crate::app::events::AppEvent;
use crate::app::state::{NoticeLevel, Screen};
use crate::app::{tasks, App};
use crate::services::wallet::{WalletSession, WalletStatus};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results.
    ///
    /// Acquires the write lock per-event for minimal duration to keep the
    /// render thread responsive.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionResult(result) => self.handle_session_result(result),
            AppEvent::MetadataResult(result) => self.handle_metadata_result(result),
            AppEvent::SupplyResult(result) => self.handle_supply_result(result),
            AppEvent::ConditionResult(result) => self.handle_condition_result(result),
            AppEvent::EligibilityResult {
                address,
                quantity,
                result,
            } => self.handle_eligibility_result(address, quantity, result),
            AppEvent::NetworkSwitchResult(result) => self.handle_network_switch_result(result),
            AppEvent::ClaimResult(result) => self.handle_claim_result(result),
            AppEvent::Notice(level, message) => {
                self.state.write().push_notice(level, message);
            }
        }
    }
}

impl App {
    fn handle_session_result(&mut self, result: Result<WalletSession, String>) {
        match result {
            Ok(session) => {
                {
                    let mut state = self.state.write();
                    state.push_notice(
                        NoticeLevel::Success,
                        format!("Wallet connected: {}", truncate_address(&session.address)),
                    );
                    state.wallet = WalletStatus::Connected(session);
                    state.current_screen = Screen::Mint;
                    state.clamp_quantity();
                }
                // The new address needs its own eligibility answer
                tasks::drop::refresh_eligibility_now(
                    self.state.clone(),
                    self.event_tx.clone(),
                    self.api.clone(),
                    self.cache.clone(),
                );
            }
            Err(error) => {
                tracing::warn!(error = %error, "Wallet connection failed");
                let mut state = self.state.write();
                state.wallet = WalletStatus::Error(error);
            }
        }
    }

    fn handle_metadata_result(&mut self, result: Result<ContractMetadata, String>) {
        self.state.write().metadata.resolve(result);
    }

    fn handle_supply_result(&mut self, result: Result<SupplyCounts, String>) {
        let mut state = self.state.write();
        state.supply.resolve(result);
        // Remaining supply bounds the quantity selector
        state.clamp_quantity();
    }

    fn handle_condition_result(&mut self, result: Result<Option<ClaimCondition>, String>) {
        let mut state = self.state.write();
        state.condition.resolve(result);
        state.clamp_quantity();
    }

    fn handle_eligibility_result(
        &mut self,
        address: String,
        quantity: u64,
        result: Result<Vec<IneligibilityReason>, String>,
    ) {
        let mut state = self.state.write();
        // The selection may have moved on while this fetch ran; a stale
        // answer must not overwrite the current one
        let current = (state.address().map(str::to_string), state.mint.quantity);
        if current != (Some(address.clone()), quantity) {
            tracing::debug!(
                address = %address,
                quantity,
                "Dropping stale eligibility result"
            );
            // A result did arrive; the refetch for the current selection
            // sets this again when it starts
            state.eligibility.loading = false;
            return;
        }
        state.eligibility.resolve(result);
        state.eligibility_key = Some((address, quantity));
    }

    fn handle_network_switch_result(&mut self, result: Result<WalletSession, String>) {
        match result {
            Ok(session) => {
                let mut state = self.state.write();
                state.push_notice(
                    NoticeLevel::Info,
                    format!("Wallet switched to {}", session.cluster),
                );
                state.wallet = WalletStatus::Connected(session);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Network switch failed");
                self.state
                    .write()
                    .push_notice(NoticeLevel::Error, format!("Network switch failed: {}", error));
            }
        }
    }

    fn handle_claim_result(&mut self, result: Result<ClaimResponse, String>) {
        match result {
            Ok(response) => {
                {
                    let mut state = self.state.write();
                    state.mint.claim_in_flight = false;
                    let noun = if state.mint.quantity > 1 { "NFTs" } else { "NFT" };
                    state.push_notice(
                        NoticeLevel::Success,
                        format!(
                            "Successfully minted {}! Signature: {}",
                            noun,
                            truncate_address(&response.transaction_signature)
                        ),
                    );
                }
                // The chain moved under us: refetch what the claim changed
                tasks::drop::refresh_supply_now(
                    self.state.clone(),
                    self.event_tx.clone(),
                    self.api.clone(),
                    self.cache.clone(),
                );
                tasks::drop::refresh_eligibility_now(
                    self.state.clone(),
                    self.event_tx.clone(),
                    self.api.clone(),
                    self.cache.clone(),
                );
            }
            Err(error) => {
                tracing::error!(error = %error, "Claim failed");
                let mut state = self.state.write();
                state.mint.claim_in_flight = false;
                let message = if error.is_empty() {
                    "Something went wrong".to_string()
                } else {
                    error
                };
                state.push_notice(NoticeLevel::Error, message);
            }
        }
    }
}
