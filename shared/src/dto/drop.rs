//! Drop contract DTOs: metadata, supply, claim conditions, eligibility,
//! and the claim write surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contract-level metadata for the drop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the collection image, when the contract publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Claimed/unclaimed token counts for the drop contract
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyCounts {
    pub claimed: u64,
    pub unclaimed: u64,
}

impl SupplyCounts {
    /// Total supply displayed as `claimed / total`
    pub fn total(&self) -> u64 {
        self.claimed.saturating_add(self.unclaimed)
    }
}

/// Currency the active claim phase is priced in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Unit price in display units, e.g. "0.05"
    pub display_value: String,
}

/// One allowlist entry: wallet address and its individual claim cap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub address: String,
    /// Decimal string; "0" means the entry grants nothing
    pub max_claimable: String,
}

/// Snapshot of the on-chain rules governing the active minting phase.
///
/// Big-number fields arrive as decimal strings (the gateway forwards the
/// SDK's representation unchanged); non-numeric values mean "unlimited".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimCondition {
    pub start_time: DateTime<Utc>,
    pub available_supply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_limit_per_transaction: Option<String>,
    /// Unit price in base units
    pub price: String,
    pub currency_metadata: CurrencyMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Vec<SnapshotEntry>>,
}

/// Active-phase read; `condition` is `null` when no phase is live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveConditionResponse {
    pub condition: Option<ClaimCondition>,
}

/// Reason codes explaining why a wallet/quantity combination cannot claim.
///
/// Codes the gateway may add in the future deserialize as [`Unknown`]
/// rather than failing the whole response.
///
/// [`Unknown`]: IneligibilityReason::Unknown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IneligibilityReason {
    NotEnoughSupply,
    AddressNotAllowed,
    NotEnoughBalance,
    NoActiveClaimPhase,
    NoClaimConditionSet,
    AlreadyClaimed,
    WaitBeforeNextClaim,
    NoWallet,
    #[serde(other)]
    Unknown,
}

/// Eligibility read for a (wallet, quantity) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityResponse {
    pub reasons: Vec<IneligibilityReason>,
}

/// Claim request submitted to the gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimRequest {
    pub session_id: String,
    pub recipient: String,
    pub quantity: u64,
}

/// Successful claim result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimResponse {
    pub transaction_signature: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_deserialize_from_wire_strings() {
        let reasons: Vec<IneligibilityReason> =
            serde_json::from_str(r#"["NOT_ENOUGH_SUPPLY", "ADDRESS_NOT_ALLOWED"]"#).unwrap();
        assert_eq!(
            reasons,
            vec![
                IneligibilityReason::NotEnoughSupply,
                IneligibilityReason::AddressNotAllowed
            ]
        );
    }

    #[test]
    fn test_unrecognized_reason_code_maps_to_unknown() {
        let reasons: Vec<IneligibilityReason> =
            serde_json::from_str(r#"["SOMETHING_NEW"]"#).unwrap();
        assert_eq!(reasons, vec![IneligibilityReason::Unknown]);
    }

    #[test]
    fn test_active_condition_absent_is_explicit_null() {
        let response: ActiveConditionResponse =
            serde_json::from_str(r#"{"condition": null}"#).unwrap();
        assert!(response.condition.is_none());
    }

    #[test]
    fn test_claim_condition_round_trips() {
        let json = r#"{
            "start_time": "2024-06-01T00:00:00Z",
            "available_supply": "500",
            "quantity_limit_per_transaction": "5",
            "price": "50000000",
            "currency_metadata": {
                "name": "Solana",
                "symbol": "SOL",
                "decimals": 9,
                "display_value": "0.05"
            },
            "snapshot": [
                {"address": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", "max_claimable": "3"}
            ]
        }"#;
        let condition: ClaimCondition = serde_json::from_str(json).unwrap();
        assert_eq!(condition.currency_metadata.decimals, 9);
        assert_eq!(condition.snapshot.as_ref().unwrap().len(), 1);

        let back = serde_json::to_string(&condition).unwrap();
        let again: ClaimCondition = serde_json::from_str(&back).unwrap();
        assert_eq!(condition, again);
    }

    #[test]
    fn test_supply_total_saturates() {
        let supply = SupplyCounts {
            claimed: u64::MAX,
            unclaimed: 1,
        };
        assert_eq!(supply.total(), u64::MAX);
    }
}
