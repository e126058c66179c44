//! # Application State Types
//!
//! All state-related types for the application: screens, gateway query
//! slots, the wallet session, and the mint controls.

use shared::dto::drop::{ClaimCondition, ContractMetadata, IneligibilityReason, SupplyCounts};

use crate::mint::eligibility::{self, DropFlags};
use crate::services::wallet::{WalletSession, WalletStatus};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Wallet connection screen (connector buttons)
    Connect,
    /// The minting page
    Mint,
}

impl Screen {
    /// Get screen title for window/header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Connect => "Connect Wallet",
            Screen::Mint => "Mint",
        }
    }
}

/// One gateway read query: last-known value, loading flag, error.
///
/// This is the explicit replacement for the SDK's reactive query objects;
/// every consumption site sees exactly which of the three it has.
#[derive(Debug, Clone)]
pub struct Query<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Query<T> {
    /// Store a completed fetch
    pub fn resolve(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            // Keep the stale value visible; the error rides alongside it
            Err(error) => self.error = Some(error),
        }
    }
}

/// Notice severity for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Mint control state
#[derive(Debug, Clone)]
pub struct MintState {
    /// Selected quantity, always within [1, selector upper bound]
    pub quantity: u64,
    /// A claim has been submitted and has not resolved yet
    pub claim_in_flight: bool,
}

impl Default for MintState {
    fn default() -> Self {
        Self {
            quantity: 1,
            claim_in_flight: false,
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Wallet connection status and session
    pub wallet: WalletStatus,
    /// Contract metadata query
    pub metadata: Query<ContractMetadata>,
    /// Claimed/unclaimed supply query
    pub supply: Query<SupplyCounts>,
    /// Active claim condition query; inner `None` means "no live phase"
    pub condition: Query<Option<ClaimCondition>>,
    /// Ineligibility reasons for the current (address, quantity) pair
    pub eligibility: Query<Vec<IneligibilityReason>>,
    /// Which (address, quantity) the eligibility data belongs to
    pub eligibility_key: Option<(String, u64)>,
    /// Mint control state
    pub mint: MintState,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(NoticeLevel, String)>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Connect,
            wallet: WalletStatus::Disconnected,
            metadata: Query::default(),
            supply: Query::default(),
            condition: Query::default(),
            eligibility: Query::default(),
            eligibility_key: None,
            mint: MintState::default(),
            pending_notifications: Vec::new(),
        }
    }

    /// The established wallet session, if any
    pub fn session(&self) -> Option<&WalletSession> {
        self.wallet.session()
    }

    /// Connected wallet address, if any
    pub fn address(&self) -> Option<&str> {
        self.wallet.address()
    }

    /// The active claim condition, flattened across "query not loaded yet"
    /// and "loaded, no live phase"
    pub fn active_condition(&self) -> Option<&ClaimCondition> {
        self.condition.data.as_ref().and_then(|c| c.as_ref())
    }

    /// Ineligibility reasons for the current selection; empty while the
    /// query has no data
    pub fn eligibility_reasons(&self) -> &[IneligibilityReason] {
        self.eligibility.data.as_deref().unwrap_or(&[])
    }

    /// Whether the eligibility data on hand was computed for the current
    /// (address, quantity) selection. The action button stays disabled
    /// until it is.
    pub fn eligibility_current(&self) -> bool {
        match (&self.eligibility_key, self.address()) {
            (Some((address, quantity)), Some(current)) => {
                address == current && *quantity == self.mint.quantity
            }
            _ => false,
        }
    }

    /// Eligibility flags derived from the current queries
    pub fn flags(&self) -> DropFlags {
        eligibility::derive_flags(
            self.supply.data.map(|s| s.unclaimed),
            self.active_condition(),
            self.address(),
            self.eligibility_reasons(),
        )
    }

    /// Upper bound of the quantity selector
    pub fn selector_upper_bound(&self) -> u64 {
        eligibility::selector_upper_bound(
            self.active_condition(),
            self.address(),
            self.supply.data.map(|s| s.unclaimed),
        )
    }

    /// Re-clamp the selected quantity after any bounds change
    pub fn clamp_quantity(&mut self) {
        let upper = self.selector_upper_bound();
        self.mint.quantity = eligibility::clamp_quantity(self.mint.quantity, upper);
    }

    /// Queue a toast notice for the next frame
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::drop::CurrencyMetadata;
    use shared::dto::wallet::{Cluster, WalletConnector};

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    fn connected_state() -> AppState {
        let mut state = AppState::new();
        state.wallet = WalletStatus::Connected(WalletSession {
            session_id: "sess-1".to_string(),
            address: ADDR.to_string(),
            cluster: Cluster::Devnet,
            connector: WalletConnector::Extension,
        });
        state
    }

    fn condition(per_tx_limit: &str) -> ClaimCondition {
        ClaimCondition {
            start_time: "2024-06-01T00:00:00Z".parse().unwrap(),
            available_supply: "100".to_string(),
            quantity_limit_per_transaction: Some(per_tx_limit.to_string()),
            price: "0".to_string(),
            currency_metadata: CurrencyMetadata {
                name: "Solana".to_string(),
                symbol: "SOL".to_string(),
                decimals: 9,
                display_value: "0".to_string(),
            },
            snapshot: None,
        }
    }

    #[test]
    fn test_quantity_reclamps_when_bounds_shrink() {
        let mut state = connected_state();
        state.condition.resolve(Ok(Some(condition("10"))));
        state.supply.resolve(Ok(SupplyCounts {
            claimed: 0,
            unclaimed: 50,
        }));
        state.mint.quantity = 10;
        state.clamp_quantity();
        assert_eq!(state.mint.quantity, 10);

        // Phase limit drops to 3: the selection must follow
        state.condition.resolve(Ok(Some(condition("3"))));
        state.clamp_quantity();
        assert_eq!(state.mint.quantity, 3);
    }

    #[test]
    fn test_query_resolve_keeps_stale_value_on_error() {
        let mut query: Query<u64> = Query::default();
        query.loading = true;
        query.resolve(Ok(7));
        assert_eq!(query.data, Some(7));
        assert!(query.error.is_none());

        query.resolve(Err("gateway down".to_string()));
        assert_eq!(query.data, Some(7));
        assert_eq!(query.error.as_deref(), Some("gateway down"));
        assert!(!query.loading);
    }

    #[test]
    fn test_flags_without_wallet_are_not_claimable() {
        let mut state = AppState::new();
        state.condition.resolve(Ok(Some(condition("10"))));
        state.supply.resolve(Ok(SupplyCounts {
            claimed: 0,
            unclaimed: 50,
        }));
        assert!(!state.flags().claimable);
    }

    #[test]
    fn test_flags_claimable_when_connected_and_clear() {
        let mut state = connected_state();
        state.condition.resolve(Ok(Some(condition("10"))));
        state.supply.resolve(Ok(SupplyCounts {
            claimed: 5,
            unclaimed: 45,
        }));
        state.eligibility.resolve(Ok(vec![]));
        assert!(state.flags().claimable);
    }
}
