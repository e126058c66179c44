//! # Drop Read Tasks
//!
//! The polling task that keeps the four gateway read queries warm, plus
//! on-demand refresh entry points for the moments that can't wait for the
//! next tick (quantity changed, wallet connected, claim landed).
//!
//! Every fetch goes through [`DropCache`]: a fresh cached value suppresses
//! the request entirely, and an in-flight marker stops the interval poll
//! and an on-demand refresh from firing the same request twice.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use parking_lot::RwLock;

use shared::dto::drop::{ClaimCondition, ContractMetadata, IneligibilityReason, SupplyCounts};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::config::{DROP_CONTRACT_ADDRESS, DROP_POLL_SECS};
use crate::core::service::DropApi;
use crate::services::query::RequestCache;
use crate::utils::runtime::TOKIO_RT;

/// Caches for the gateway read queries, keyed by request parameters
pub struct DropCache {
    metadata: RequestCache<String, ContractMetadata>,
    supply: RequestCache<String, SupplyCounts>,
    condition: RequestCache<String, Option<ClaimCondition>>,
    eligibility: RequestCache<(String, u64), Vec<IneligibilityReason>>,
}

impl DropCache {
    pub fn new() -> Self {
        Self {
            // Contract metadata is immutable in practice
            metadata: RequestCache::new(Duration::from_secs(300)),
            supply: RequestCache::new(Duration::from_secs(15)),
            condition: RequestCache::new(Duration::from_secs(30)),
            eligibility: RequestCache::new(Duration::from_secs(15)),
        }
    }

    /// Force the next poll to refetch supply (after a confirmed claim)
    pub fn invalidate_supply(&self) {
        self.supply.invalidate(&DROP_CONTRACT_ADDRESS.to_string());
    }

    /// Force the next poll to refetch eligibility for the given pair
    pub fn invalidate_eligibility(&self, address: &str, quantity: u64) {
        self.eligibility
            .invalidate(&(address.to_string(), quantity));
    }
}

impl Default for DropCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the interval poll refreshing all drop reads.
///
/// Runs for the lifetime of the process; each tick only hits the gateway
/// for queries whose cache entry has expired.
pub(crate) fn spawn_drop_poll(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
    cache: Arc<DropCache>,
) {
    TOKIO_RT.spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(DROP_POLL_SECS));
        loop {
            interval.tick().await;
            fetch_metadata(&state, &event_tx, &api, &cache).await;
            fetch_supply(&state, &event_tx, &api, &cache).await;
            fetch_condition(&state, &event_tx, &api, &cache).await;
            fetch_eligibility(&state, &event_tx, &api, &cache).await;
        }
    });
}

/// Refresh eligibility immediately for the current (address, quantity)
/// selection, bypassing the cache TTL.
pub(crate) fn refresh_eligibility_now(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
    cache: Arc<DropCache>,
) {
    let key = eligibility_key(&state);
    if let Some((address, quantity)) = key {
        cache.invalidate_eligibility(&address, quantity);
    }
    TOKIO_RT.spawn(async move {
        fetch_eligibility(&state, &event_tx, &api, &cache).await;
    });
}

/// Refresh supply immediately, bypassing the cache TTL
pub(crate) fn refresh_supply_now(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn DropApi>,
    cache: Arc<DropCache>,
) {
    cache.invalidate_supply();
    TOKIO_RT.spawn(async move {
        fetch_supply(&state, &event_tx, &api, &cache).await;
    });
}

fn contract_key() -> String {
    DROP_CONTRACT_ADDRESS.to_string()
}

/// The (address, quantity) pair eligibility should be fetched for, when a
/// wallet is connected
fn eligibility_key(state: &Arc<RwLock<AppState>>) -> Option<(String, u64)> {
    let state = state.read();
    let address = state.address()?.to_string();
    Some((address, state.mint.quantity))
}

async fn fetch_metadata(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    api: &Arc<dyn DropApi>,
    cache: &Arc<DropCache>,
) {
    let key = contract_key();
    if cache.metadata.fresh(&key).is_some() || !cache.metadata.begin(&key) {
        return;
    }
    {
        state.write().metadata.loading = true;
    }

    match api.get_contract_metadata(&key).await {
        Ok(metadata) => {
            cache.metadata.complete(&key, metadata.clone());
            let _ = event_tx.send(AppEvent::MetadataResult(Ok(metadata))).await;
        }
        Err(error) => {
            cache.metadata.fail(&key);
            tracing::warn!(error = %error, "Contract metadata fetch failed");
            let _ = event_tx.send(AppEvent::MetadataResult(Err(error))).await;
        }
    }
}

async fn fetch_supply(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    api: &Arc<dyn DropApi>,
    cache: &Arc<DropCache>,
) {
    let key = contract_key();
    if cache.supply.fresh(&key).is_some() || !cache.supply.begin(&key) {
        return;
    }
    {
        state.write().supply.loading = true;
    }

    match api.get_supply(&key).await {
        Ok(supply) => {
            cache.supply.complete(&key, supply);
            let _ = event_tx.send(AppEvent::SupplyResult(Ok(supply))).await;
        }
        Err(error) => {
            cache.supply.fail(&key);
            tracing::warn!(error = %error, "Supply fetch failed");
            let _ = event_tx.send(AppEvent::SupplyResult(Err(error))).await;
        }
    }
}

async fn fetch_condition(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    api: &Arc<dyn DropApi>,
    cache: &Arc<DropCache>,
) {
    let key = contract_key();
    if cache.condition.fresh(&key).is_some() || !cache.condition.begin(&key) {
        return;
    }
    {
        state.write().condition.loading = true;
    }

    match api.get_active_claim_condition(&key).await {
        Ok(condition) => {
            cache.condition.complete(&key, condition.clone());
            let _ = event_tx.send(AppEvent::ConditionResult(Ok(condition))).await;
        }
        Err(error) => {
            cache.condition.fail(&key);
            tracing::warn!(error = %error, "Claim condition fetch failed");
            let _ = event_tx.send(AppEvent::ConditionResult(Err(error))).await;
        }
    }
}

async fn fetch_eligibility(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    api: &Arc<dyn DropApi>,
    cache: &Arc<DropCache>,
) {
    // No wallet, no eligibility query
    let Some((address, quantity)) = eligibility_key(state) else {
        return;
    };
    let key = (address.clone(), quantity);
    if cache.eligibility.fresh(&key).is_some() || !cache.eligibility.begin(&key) {
        return;
    }
    {
        state.write().eligibility.loading = true;
    }

    let result = api
        .get_claim_ineligibility_reasons(DROP_CONTRACT_ADDRESS, &address, quantity)
        .await;
    match &result {
        Ok(reasons) => cache.eligibility.complete(&key, reasons.clone()),
        Err(error) => {
            cache.eligibility.fail(&key);
            tracing::warn!(error = %error, "Eligibility fetch failed");
        }
    }
    let _ = event_tx
        .send(AppEvent::EligibilityResult {
            address,
            quantity,
            result,
        })
        .await;
}
