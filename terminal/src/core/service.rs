//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::drop::{
    ClaimCondition, ClaimRequest, ClaimResponse, ContractMetadata, IneligibilityReason,
    SupplyCounts,
};
use shared::dto::wallet::{Cluster, SessionResponse, WalletConnector};

/// Gateway operations the terminal depends on.
///
/// Everything hard (wallet connection protocols, chain RPC, transaction
/// assembly and signing) lives behind this boundary. The terminal only
/// composes the results. Implemented by
/// [`crate::services::api::SdkClient`] in production and by mock types in
/// tests.
#[async_trait]
pub trait DropApi: Send + Sync {
    /// Contract-level metadata (name, description, image)
    async fn get_contract_metadata(&self, contract: &str) -> Result<ContractMetadata, String>;

    /// Claimed/unclaimed token counts
    async fn get_supply(&self, contract: &str) -> Result<SupplyCounts, String>;

    /// The currently active claim condition, if any phase is live
    async fn get_active_claim_condition(
        &self,
        contract: &str,
    ) -> Result<Option<ClaimCondition>, String>;

    /// Reasons the given wallet cannot claim the given quantity right now
    async fn get_claim_ineligibility_reasons(
        &self,
        contract: &str,
        address: &str,
        quantity: u64,
    ) -> Result<Vec<IneligibilityReason>, String>;

    /// Submit a claim for `request.quantity` tokens to `request.recipient`
    async fn claim(&self, contract: &str, request: &ClaimRequest) -> Result<ClaimResponse, String>;

    /// Start a wallet connector flow
    async fn connect_wallet(&self, connector: WalletConnector) -> Result<SessionResponse, String>;

    /// Poll an in-flight or established wallet session
    async fn get_wallet_session(&self, session_id: &str) -> Result<SessionResponse, String>;

    /// Ask the wallet session to move to another cluster
    async fn switch_network(
        &self,
        session_id: &str,
        cluster: Cluster,
    ) -> Result<SessionResponse, String>;
}
