//! # Wallet Handlers
//!
//! Handlers for wallet connection and disconnection.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use shared::dto::wallet::WalletConnector;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Query, Screen};
use crate::core::service::DropApi;
use crate::services::wallet::{WalletService, WalletStatus};
use crate::utils::runtime::TOKIO_RT;

/// Handle a connector button click.
///
/// Internal handler function - use [`crate::app::App::handle_connect_click`] instead.
pub(crate) fn handle_connect_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
    connector: WalletConnector,
) {
    {
        let mut state = state.write();
        if matches!(state.wallet, WalletStatus::Connecting(_)) {
            // One connector flow at a time
            return;
        }
        state.wallet = WalletStatus::Connecting(connector);
    }

    TOKIO_RT.spawn(async move {
        tracing::info!(connector = ?connector, "Starting wallet connector flow");
        let result = WalletService::new(api)
            .connect(connector)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::SessionResult(result)).await;
    });
}

/// Handle the disconnect button click.
///
/// Internal handler function - use [`crate::app::App::handle_disconnect_click`] instead.
pub(crate) fn handle_disconnect_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Some(session) = state.session() {
        tracing::info!(address = %session.address, "Wallet disconnected");
    }
    state.wallet = WalletStatus::Disconnected;
    // Eligibility belongs to the session that just went away
    state.eligibility = Query::default();
    state.eligibility_key = None;
    state.current_screen = Screen::Connect;
}
