//! # SDK Client
//!
//! Main HTTP client for drop SDK gateway communication.

use reqwest::Client;

use shared::dto::drop::{
    ClaimCondition, ClaimRequest, ClaimResponse, ContractMetadata, IneligibilityReason,
    SupplyCounts,
};
use shared::dto::wallet::{Cluster, SessionResponse, WalletConnector};

use crate::core::service::DropApi;

/// Base URL for the drop SDK gateway
const API_BASE_URL: &str = "http://127.0.0.1:3001";

/// HTTP client for the drop SDK gateway.
///
/// Maintains a connection pool for efficient HTTP/2 multiplexing; all
/// calls share the one `reqwest::Client`.
pub struct SdkClient {
    pub(crate) client: Client,
    base_url: String,
}

impl SdkClient {
    /// Create a new client against the default gateway.
    ///
    /// The client is configured with a 10 second timeout so a stalled
    /// gateway cannot freeze the UI's background tasks.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a specific gateway base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SdkClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement the DropApi trait for SdkClient
#[async_trait::async_trait]
impl DropApi for SdkClient {
    async fn get_contract_metadata(&self, contract: &str) -> Result<ContractMetadata, String> {
        crate::services::api::drop::get_contract_metadata(self, contract).await
    }

    async fn get_supply(&self, contract: &str) -> Result<SupplyCounts, String> {
        crate::services::api::drop::get_supply(self, contract).await
    }

    async fn get_active_claim_condition(
        &self,
        contract: &str,
    ) -> Result<Option<ClaimCondition>, String> {
        crate::services::api::drop::get_active_claim_condition(self, contract).await
    }

    async fn get_claim_ineligibility_reasons(
        &self,
        contract: &str,
        address: &str,
        quantity: u64,
    ) -> Result<Vec<IneligibilityReason>, String> {
        crate::services::api::drop::get_claim_ineligibility_reasons(self, contract, address, quantity)
            .await
    }

    async fn claim(&self, contract: &str, request: &ClaimRequest) -> Result<ClaimResponse, String> {
        crate::services::api::claim::claim(self, contract, request).await
    }

    async fn connect_wallet(&self, connector: WalletConnector) -> Result<SessionResponse, String> {
        crate::services::api::wallet::connect_wallet(self, connector).await
    }

    async fn get_wallet_session(&self, session_id: &str) -> Result<SessionResponse, String> {
        crate::services::api::wallet::get_wallet_session(self, session_id).await
    }

    async fn switch_network(
        &self,
        session_id: &str,
        cluster: Cluster,
    ) -> Result<SessionResponse, String> {
        crate::services::api::wallet::switch_network(self, session_id, cluster).await
    }
}
