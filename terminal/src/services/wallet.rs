//! # Wallet Service
//!
//! Drives wallet connector flows against the SDK gateway and yields the
//! session object the rest of the application works with.
//!
//! ## Features
//! - Start a connector flow (extension / relay / exchange-hosted)
//! - Poll the gateway until the external flow approves or rejects
//! - Request a cluster switch for an established session
//!
//! The connection protocols themselves (extension bridging, relay pairing,
//! exchange auth) are the gateway's business; this service only shepherds
//! the session through its states. No key material ever reaches the
//! terminal.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use shared::dto::wallet::{Cluster, SessionStatus, WalletConnector};

use crate::core::service::DropApi;

/// How often an in-flight connector flow is polled
const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Give the external flow two minutes before declaring it abandoned
const SESSION_POLL_ATTEMPTS: u32 = 120;

/// Wallet connection errors
#[derive(Debug, Error)]
pub enum WalletError {
    /// Gateway request failed (network, HTTP, parse)
    #[error("gateway error: {0}")]
    Gateway(String),
    /// The user or the external flow declined the connection
    #[error("connection rejected: {0}")]
    Rejected(String),
    /// The external flow never completed
    #[error("connection timed out waiting for wallet approval")]
    Timeout,
    /// The gateway reported an address that does not parse as base58
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),
    /// Operation requires an established session
    #[error("no wallet session")]
    NotConnected,
}

/// An established wallet session.
///
/// Created when a connector flow completes, cleared on disconnect. Passed
/// by value through events; everything that needs the wallet reads from
/// this one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    pub session_id: String,
    pub address: String,
    pub cluster: Cluster,
    pub connector: WalletConnector,
}

/// Wallet connection status as rendered by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connector flow in progress
    Connecting(WalletConnector),
    /// Connected session
    Connected(WalletSession),
    /// Last connection attempt failed
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn session(&self) -> Option<&WalletSession> {
        match self {
            WalletStatus::Connected(session) => Some(session),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.session().map(|session| session.address.as_str())
    }
}

/// Wallet service for driving gateway session flows
pub struct WalletService {
    api: Arc<dyn DropApi>,
}

impl WalletService {
    pub fn new(api: Arc<dyn DropApi>) -> Self {
        Self { api }
    }

    /// Run a connector flow to completion.
    ///
    /// Starts the flow, then polls the session until the external wallet
    /// approves (yielding a [`WalletSession`]) or rejects. The returned
    /// address has been validated as a base58 public key.
    pub async fn connect(&self, connector: WalletConnector) -> Result<WalletSession, WalletError> {
        let response = self
            .api
            .connect_wallet(connector)
            .await
            .map_err(WalletError::Gateway)?;
        let session_id = response.session_id;
        let mut status = response.status;

        let mut attempts = 0u32;
        loop {
            match status {
                SessionStatus::Connected { address, cluster } => {
                    Pubkey::from_str(&address)
                        .map_err(|_| WalletError::InvalidAddress(address.clone()))?;
                    tracing::info!(address = %address, cluster = %cluster, connector = ?connector, "Wallet connected");
                    return Ok(WalletSession {
                        session_id,
                        address,
                        cluster,
                        connector,
                    });
                }
                SessionStatus::Rejected { reason } => {
                    let reason =
                        reason.unwrap_or_else(|| "Connection request was declined".to_string());
                    tracing::warn!(connector = ?connector, reason = %reason, "Wallet connection rejected");
                    return Err(WalletError::Rejected(reason));
                }
                SessionStatus::Pending => {
                    attempts += 1;
                    if attempts > SESSION_POLL_ATTEMPTS {
                        return Err(WalletError::Timeout);
                    }
                    tokio::time::sleep(SESSION_POLL_INTERVAL).await;
                    status = self
                        .api
                        .get_wallet_session(&session_id)
                        .await
                        .map_err(WalletError::Gateway)?
                        .status;
                }
            }
        }
    }

    /// Ask the session's wallet to move to `cluster`.
    ///
    /// Returns the updated session on success. A flow that comes back
    /// pending or rejected counts as a refusal.
    pub async fn switch_network(
        &self,
        session: &WalletSession,
        cluster: Cluster,
    ) -> Result<WalletSession, WalletError> {
        let response = self
            .api
            .switch_network(&session.session_id, cluster)
            .await
            .map_err(WalletError::Gateway)?;

        match response.status {
            SessionStatus::Connected { address, cluster } => Ok(WalletSession {
                session_id: session.session_id.clone(),
                address,
                cluster,
                connector: session.connector,
            }),
            SessionStatus::Rejected { reason } => Err(WalletError::Rejected(
                reason.unwrap_or_else(|| "Network switch was declined".to_string()),
            )),
            SessionStatus::Pending => Err(WalletError::Gateway(
                "Network switch did not complete".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::dto::drop::{
        ClaimCondition, ClaimRequest, ClaimResponse, ContractMetadata, IneligibilityReason,
        SupplyCounts,
    };
    use shared::dto::wallet::SessionResponse;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    /// Mock gateway scripted with a sequence of session states
    struct MockGateway {
        states: Mutex<Vec<SessionStatus>>,
    }

    impl MockGateway {
        fn new(mut states: Vec<SessionStatus>) -> Self {
            states.reverse();
            Self {
                states: Mutex::new(states),
            }
        }

        fn next_status(&self) -> SessionStatus {
            self.states
                .lock()
                .pop()
                .unwrap_or(SessionStatus::Pending)
        }
    }

    #[async_trait]
    impl DropApi for MockGateway {
        async fn get_contract_metadata(&self, _: &str) -> Result<ContractMetadata, String> {
            Err("not used".to_string())
        }
        async fn get_supply(&self, _: &str) -> Result<SupplyCounts, String> {
            Err("not used".to_string())
        }
        async fn get_active_claim_condition(
            &self,
            _: &str,
        ) -> Result<Option<ClaimCondition>, String> {
            Err("not used".to_string())
        }
        async fn get_claim_ineligibility_reasons(
            &self,
            _: &str,
            _: &str,
            _: u64,
        ) -> Result<Vec<IneligibilityReason>, String> {
            Err("not used".to_string())
        }
        async fn claim(&self, _: &str, _: &ClaimRequest) -> Result<ClaimResponse, String> {
            Err("not used".to_string())
        }
        async fn connect_wallet(
            &self,
            _: WalletConnector,
        ) -> Result<SessionResponse, String> {
            Ok(SessionResponse {
                session_id: "sess-1".to_string(),
                status: self.next_status(),
            })
        }
        async fn get_wallet_session(&self, _: &str) -> Result<SessionResponse, String> {
            Ok(SessionResponse {
                session_id: "sess-1".to_string(),
                status: self.next_status(),
            })
        }
        async fn switch_network(
            &self,
            _: &str,
            _: Cluster,
        ) -> Result<SessionResponse, String> {
            Ok(SessionResponse {
                session_id: "sess-1".to_string(),
                status: self.next_status(),
            })
        }
    }

    #[tokio::test]
    async fn test_connect_polls_until_approved() {
        let gateway = Arc::new(MockGateway::new(vec![
            SessionStatus::Pending,
            SessionStatus::Connected {
                address: ADDR.to_string(),
                cluster: Cluster::Devnet,
            },
        ]));
        let service = WalletService::new(gateway);

        let session = service.connect(WalletConnector::Relay).await.unwrap();
        assert_eq!(session.address, ADDR);
        assert_eq!(session.cluster, Cluster::Devnet);
        assert_eq!(session.connector, WalletConnector::Relay);
    }

    #[tokio::test]
    async fn test_connect_surfaces_rejection() {
        let gateway = Arc::new(MockGateway::new(vec![SessionStatus::Rejected {
            reason: Some("user closed the prompt".to_string()),
        }]));
        let service = WalletService::new(gateway);

        let err = service
            .connect(WalletConnector::Extension)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_address() {
        let gateway = Arc::new(MockGateway::new(vec![SessionStatus::Connected {
            address: "not-base58-0OIl".to_string(),
            cluster: Cluster::Devnet,
        }]));
        let service = WalletService::new(gateway);

        let err = service.connect(WalletConnector::Exchange).await.unwrap_err();
        assert!(matches!(err, WalletError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_switch_network_updates_session() {
        let gateway = Arc::new(MockGateway::new(vec![SessionStatus::Connected {
            address: ADDR.to_string(),
            cluster: Cluster::Devnet,
        }]));
        let service = WalletService::new(gateway);
        let session = WalletSession {
            session_id: "sess-1".to_string(),
            address: ADDR.to_string(),
            cluster: Cluster::MainnetBeta,
            connector: WalletConnector::Relay,
        };

        let updated = service
            .switch_network(&session, Cluster::Devnet)
            .await
            .unwrap();
        assert_eq!(updated.cluster, Cluster::Devnet);
        assert_eq!(updated.session_id, session.session_id);
    }

    #[test]
    fn test_wallet_status_accessors() {
        let session = WalletSession {
            session_id: "sess-1".to_string(),
            address: ADDR.to_string(),
            cluster: Cluster::Devnet,
            connector: WalletConnector::Extension,
        };
        let status = WalletStatus::Connected(session);
        assert!(status.is_connected());
        assert_eq!(status.address(), Some(ADDR));

        let status = WalletStatus::Disconnected;
        assert!(!status.is_connected());
        assert_eq!(status.address(), None);
    }
}
