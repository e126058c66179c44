//! # Drop Read Endpoints
//!
//! Contract metadata, supply counts, the active claim condition, and
//! per-wallet claim eligibility.

use shared::dto::drop::{
    ActiveConditionResponse, ClaimCondition, ContractMetadata, EligibilityResponse,
    IneligibilityReason, SupplyCounts,
};

use super::client::SdkClient;

/// Contract-level metadata (name, description, image).
pub async fn get_contract_metadata(
    client: &SdkClient,
    contract: &str,
) -> Result<ContractMetadata, String> {
    let response = client
        .client
        .get(format!(
            "{}/api/drop/{}/metadata",
            client.base_url(),
            contract
        ))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<ContractMetadata>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Failed to fetch metadata: {}", response.status()))
    }
}

/// Claimed/unclaimed token counts.
pub async fn get_supply(client: &SdkClient, contract: &str) -> Result<SupplyCounts, String> {
    let response = client
        .client
        .get(format!("{}/api/drop/{}/supply", client.base_url(), contract))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<SupplyCounts>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Failed to fetch supply: {}", response.status()))
    }
}

/// The currently active claim condition; `None` when no phase is live.
pub async fn get_active_claim_condition(
    client: &SdkClient,
    contract: &str,
) -> Result<Option<ClaimCondition>, String> {
    let response = client
        .client
        .get(format!(
            "{}/api/drop/{}/claim-condition/active",
            client.base_url(),
            contract
        ))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<ActiveConditionResponse>()
            .await
            .map(|body| body.condition)
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!(
            "Failed to fetch claim condition: {}",
            response.status()
        ))
    }
}

/// Reasons the given wallet cannot claim the given quantity right now.
/// An empty list means the claim would be accepted.
pub async fn get_claim_ineligibility_reasons(
    client: &SdkClient,
    contract: &str,
    address: &str,
    quantity: u64,
) -> Result<Vec<IneligibilityReason>, String> {
    let response = client
        .client
        .get(format!(
            "{}/api/drop/{}/eligibility",
            client.base_url(),
            contract
        ))
        .query(&[("address", address), ("quantity", &quantity.to_string())])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<EligibilityResponse>()
            .await
            .map(|body| body.reasons)
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!(
            "Failed to fetch eligibility: {}",
            response.status()
        ))
    }
}
