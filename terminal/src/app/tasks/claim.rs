//! # Claim Tasks
//!
//! Claim submission and the network-switch request that precedes it when
//! the wallet session sits on the wrong cluster.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use shared::dto::drop::ClaimRequest;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NoticeLevel};
use crate::config::{DROP_CONTRACT_ADDRESS, EXPECTED_CLUSTER};
use crate::core::service::DropApi;
use crate::services::wallet::WalletService;
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation;

/// Submit a claim for the current selection.
///
/// Fire-and-forget: one claim in flight at a time, no retries, no
/// idempotency tracking. Resubmission is the user clicking again after the
/// result lands.
pub(crate) fn submit_claim(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
) {
    let (session, quantity) = {
        let mut state = state.write();
        if state.mint.claim_in_flight {
            // Button is disabled while pending; a second click is a no-op
            return;
        }
        let Some(session) = state.session().cloned() else {
            tracing::warn!("Claim requested without a wallet session");
            return;
        };
        let recipient_check = validation::validate_address(&session.address);
        if !recipient_check.is_valid {
            state.push_notice(
                NoticeLevel::Error,
                recipient_check
                    .error
                    .unwrap_or_else(|| "Invalid recipient address".to_string()),
            );
            return;
        }
        state.mint.claim_in_flight = true;
        (session, state.mint.quantity)
    };

    TOKIO_RT.spawn(async move {
        tracing::info!(
            recipient = %session.address,
            quantity,
            "Submitting claim"
        );
        let request = ClaimRequest {
            session_id: session.session_id.clone(),
            recipient: session.address.clone(),
            quantity,
        };
        let result = api.claim(DROP_CONTRACT_ADDRESS, &request).await;
        let _ = event_tx.send(AppEvent::ClaimResult(result)).await;
    });
}

/// Ask the wallet to switch to the drop's expected cluster.
///
/// Called instead of submitting when the session reports the wrong
/// network; the claim itself is aborted and the user re-clicks once the
/// wallet has moved.
pub(crate) fn switch_network(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
) {
    let session = {
        let state = state.read();
        match state.session() {
            Some(session) => session.clone(),
            None => return,
        }
    };

    TOKIO_RT.spawn(async move {
        let _ = event_tx
            .send(AppEvent::Notice(
                NoticeLevel::Info,
                format!(
                    "Wallet is on {}; requesting switch to {}",
                    session.cluster, EXPECTED_CLUSTER
                ),
            ))
            .await;

        let result = WalletService::new(api)
            .switch_network(&session, EXPECTED_CLUSTER)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::NetworkSwitchResult(result)).await;
    });
}
