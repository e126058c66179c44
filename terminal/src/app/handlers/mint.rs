//! # Mint Handlers
//!
//! Quantity selection and the mint button click.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::app::tasks::drop::DropCache;
use crate::config::EXPECTED_CLUSTER;
use crate::core::service::DropApi;
use crate::mint::eligibility;

/// Handle a quantity input change: clamp into [1, upper bound] and
/// refresh eligibility for the new selection.
///
/// Internal handler function - use [`crate::app::App::handle_quantity_change`] instead.
pub(crate) fn handle_quantity_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
    cache: Arc<DropCache>,
    quantity: u64,
) {
    let changed = {
        let mut state = state.write();
        let upper = state.selector_upper_bound();
        let clamped = eligibility::clamp_quantity(quantity, upper);
        let changed = clamped != state.mint.quantity;
        state.mint.quantity = clamped;
        changed
    };

    // Eligibility is keyed by (address, quantity); a new quantity needs a
    // fresh answer
    if changed {
        tasks::drop::refresh_eligibility_now(state, event_tx, api, cache);
    }
}

/// Handle the mint button click.
///
/// Wrong cluster: request a network switch and abort without submitting.
/// Otherwise submit the claim.
///
/// Internal handler function - use [`crate::app::App::handle_mint_click`] instead.
pub(crate) fn handle_mint_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
) {
    let on_wrong_network = {
        let state = state.read();
        if state.mint.claim_in_flight {
            return;
        }
        match state.session() {
            Some(session) => session.cluster != EXPECTED_CLUSTER,
            // No session: the mint screen is not reachable, nothing to do
            None => return,
        }
    };

    if on_wrong_network {
        tasks::claim::switch_network(state, event_tx, api);
        return;
    }

    tasks::claim::submit_claim(state, event_tx, api);
}
