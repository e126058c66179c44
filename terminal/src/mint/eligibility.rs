//! Eligibility flags and quantity bounds derived from gateway reads.

use shared::dto::drop::{ClaimCondition, IneligibilityReason};

/// Cap used when a phase publishes no usable per-transaction limit and when
/// the remaining supply is unknown
pub const DEFAULT_MAX_CLAIMABLE: u64 = 1000;

/// View-state booleans for the mint screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropFlags {
    /// No unclaimed tokens remain on the contract
    pub sold_out: bool,
    /// No claim phase is currently active
    pub no_active_phase: bool,
    /// A phase is active but its own available supply is exhausted
    pub not_ready: bool,
    /// Connected, supply left, and no ineligibility reasons
    pub claimable: bool,
}

/// Derive the mint screen's eligibility flags.
///
/// Without a connected wallet the result is never claimable, whatever the
/// other inputs say; the UI routes to the connect screen in that case.
pub fn derive_flags(
    unclaimed: Option<u64>,
    condition: Option<&ClaimCondition>,
    address: Option<&str>,
    reasons: &[IneligibilityReason],
) -> DropFlags {
    let sold_out = unclaimed == Some(0);
    let no_active_phase = condition.is_none();
    let not_ready = condition
        .map(|c| c.available_supply.parse::<u64>() == Ok(0))
        .unwrap_or(false);
    let claimable = !sold_out && address.is_some() && reasons.is_empty();

    DropFlags {
        sold_out,
        no_active_phase,
        not_ready,
        claimable,
    }
}

/// Per-wallet claim cap granted by the allowlist snapshot, if the connected
/// address has an entry with a non-zero allowance
fn snapshot_cap(condition: &ClaimCondition, address: &str) -> Option<u64> {
    condition
        .snapshot
        .as_ref()?
        .iter()
        .find(|entry| entry.address == address)
        .and_then(|entry| entry.max_claimable.parse::<u64>().ok())
        .filter(|cap| *cap > 0)
}

/// Resolve how many tokens the connected wallet may claim in one go.
///
/// A non-zero snapshot allowance wins; otherwise the phase's
/// per-transaction limit applies, with [`DEFAULT_MAX_CLAIMABLE`] standing
/// in when that limit is absent or non-numeric ("unlimited").
pub fn resolve_max_claimable(condition: Option<&ClaimCondition>, address: Option<&str>) -> u64 {
    let per_tx_limit = condition
        .and_then(|c| c.quantity_limit_per_transaction.as_deref())
        .and_then(|limit| limit.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_CLAIMABLE);

    match (condition, address) {
        (Some(condition), Some(address)) => {
            snapshot_cap(condition, address).unwrap_or(per_tx_limit)
        }
        _ => per_tx_limit,
    }
}

/// Upper bound for the quantity selector: the resolved cap, limited by the
/// remaining unclaimed supply, never below 1.
///
/// Zero/unknown unclaimed supply falls back to the sentinel; the sold-out
/// flag, not the bound, is what disables the control in that case.
pub fn selector_upper_bound(
    condition: Option<&ClaimCondition>,
    address: Option<&str>,
    unclaimed: Option<u64>,
) -> u64 {
    let cap = resolve_max_claimable(condition, address);
    let remaining = unclaimed
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CLAIMABLE);
    cap.min(remaining).max(1)
}

/// Clamp a selected quantity into `[1, upper]`
pub fn clamp_quantity(quantity: u64, upper: u64) -> u64 {
    quantity.clamp(1, upper.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::drop::{CurrencyMetadata, SnapshotEntry};

    fn condition(
        available_supply: &str,
        per_tx_limit: Option<&str>,
        snapshot: Option<Vec<SnapshotEntry>>,
    ) -> ClaimCondition {
        ClaimCondition {
            start_time: "2024-06-01T00:00:00Z".parse().unwrap(),
            available_supply: available_supply.to_string(),
            quantity_limit_per_transaction: per_tx_limit.map(str::to_string),
            price: "0".to_string(),
            currency_metadata: CurrencyMetadata {
                name: "Solana".to_string(),
                symbol: "SOL".to_string(),
                decimals: 9,
                display_value: "0".to_string(),
            },
            snapshot,
        }
    }

    fn entry(address: &str, max_claimable: &str) -> SnapshotEntry {
        SnapshotEntry {
            address: address.to_string(),
            max_claimable: max_claimable.to_string(),
        }
    }

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    #[test]
    fn test_sold_out_when_unclaimed_is_zero() {
        let c = condition("100", Some("5"), None);
        let flags = derive_flags(Some(0), Some(&c), Some(ADDR), &[]);
        assert!(flags.sold_out);
        assert!(!flags.claimable);
    }

    #[test]
    fn test_sold_out_wins_regardless_of_reasons() {
        let c = condition("100", Some("5"), None);
        let flags = derive_flags(
            Some(0),
            Some(&c),
            Some(ADDR),
            &[IneligibilityReason::NotEnoughSupply],
        );
        assert!(flags.sold_out);
        assert!(!flags.claimable);
    }

    #[test]
    fn test_no_active_phase_is_distinct_from_sold_out() {
        let flags = derive_flags(Some(50), None, Some(ADDR), &[]);
        assert!(flags.no_active_phase);
        assert!(!flags.sold_out);
        assert!(!flags.not_ready);
    }

    #[test]
    fn test_not_ready_when_phase_supply_is_zero() {
        let c = condition("0", Some("5"), None);
        let flags = derive_flags(Some(50), Some(&c), Some(ADDR), &[]);
        assert!(flags.not_ready);
        assert!(!flags.no_active_phase);
    }

    #[test]
    fn test_unlimited_phase_supply_is_ready() {
        let c = condition("unlimited", Some("5"), None);
        let flags = derive_flags(Some(50), Some(&c), Some(ADDR), &[]);
        assert!(!flags.not_ready);
    }

    #[test]
    fn test_no_wallet_is_never_claimable() {
        let c = condition("100", Some("5"), None);
        let flags = derive_flags(Some(50), Some(&c), None, &[]);
        assert!(!flags.claimable);
    }

    #[test]
    fn test_claimable_when_connected_with_no_reasons() {
        let c = condition("100", Some("5"), None);
        let flags = derive_flags(Some(50), Some(&c), Some(ADDR), &[]);
        assert!(flags.claimable);
    }

    #[test]
    fn test_reasons_block_claimable() {
        let c = condition("100", Some("5"), None);
        let flags = derive_flags(
            Some(50),
            Some(&c),
            Some(ADDR),
            &[IneligibilityReason::AddressNotAllowed],
        );
        assert!(!flags.claimable);
    }

    #[test]
    fn test_snapshot_allowance_wins_over_per_tx_limit() {
        let c = condition("100", Some("5"), Some(vec![entry(ADDR, "3")]));
        assert_eq!(resolve_max_claimable(Some(&c), Some(ADDR)), 3);
    }

    #[test]
    fn test_zero_snapshot_allowance_falls_back_to_limit() {
        let c = condition("100", Some("5"), Some(vec![entry(ADDR, "0")]));
        assert_eq!(resolve_max_claimable(Some(&c), Some(ADDR)), 5);
    }

    #[test]
    fn test_address_missing_from_snapshot_falls_back_to_limit() {
        let c = condition("100", Some("5"), Some(vec![entry("OtherAddr", "7")]));
        assert_eq!(resolve_max_claimable(Some(&c), Some(ADDR)), 5);
    }

    #[test]
    fn test_non_numeric_limit_uses_sentinel() {
        let c = condition("100", Some("unlimited"), None);
        assert_eq!(resolve_max_claimable(Some(&c), Some(ADDR)), 1000);
        let c = condition("100", None, None);
        assert_eq!(resolve_max_claimable(Some(&c), Some(ADDR)), 1000);
    }

    #[test]
    fn test_no_condition_uses_sentinel() {
        assert_eq!(resolve_max_claimable(None, Some(ADDR)), 1000);
    }

    #[test]
    fn test_upper_bound_is_min_of_cap_and_supply() {
        let c = condition("100", Some("5"), None);
        assert_eq!(selector_upper_bound(Some(&c), Some(ADDR), Some(3)), 3);
        assert_eq!(selector_upper_bound(Some(&c), Some(ADDR), Some(50)), 5);
    }

    #[test]
    fn test_upper_bound_unknown_supply_uses_sentinel() {
        let c = condition("100", Some("5"), None);
        assert_eq!(selector_upper_bound(Some(&c), Some(ADDR), None), 5);
        assert_eq!(selector_upper_bound(None, None, None), 1000);
    }

    #[test]
    fn test_upper_bound_never_below_one() {
        let c = condition("100", Some("0"), None);
        assert_eq!(selector_upper_bound(Some(&c), Some(ADDR), Some(50)), 1);
        // sold out: the flag disables the control, the bound stays sane
        let c = condition("100", Some("5"), None);
        assert_eq!(selector_upper_bound(Some(&c), Some(ADDR), Some(0)), 5);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(3, 5), 3);
        assert_eq!(clamp_quantity(9, 5), 5);
        assert_eq!(clamp_quantity(2, 0), 1);
    }
}
