//! Wallet session DTOs: connector selection, session polling, and
//! network switching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet connector entry points supported by the gateway.
///
/// Each maps to an external authentication flow that ends with a connected
/// address or a rejection; the protocol itself lives behind the gateway.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalletConnector {
    /// Browser-extension wallet bridged by the gateway
    Extension,
    /// Wallet-relay pairing protocol
    Relay,
    /// Exchange-hosted wallet
    Exchange,
}

impl WalletConnector {
    /// Display name for connector buttons
    pub fn label(&self) -> &'static str {
        match self {
            WalletConnector::Extension => "Extension Wallet",
            WalletConnector::Relay => "Wallet Relay",
            WalletConnector::Exchange => "Exchange Wallet",
        }
    }
}

/// Network cluster a wallet session is attached to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
        }
    }
}

/// Start a connector flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectRequest {
    pub connector: WalletConnector,
}

/// Where an in-flight connector flow currently stands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionStatus {
    /// External flow has not completed yet; keep polling
    Pending,
    /// Flow finished with a connected address on the given cluster
    Connected { address: String, cluster: Cluster },
    /// User (or the external flow) declined the connection
    Rejected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

/// Session state returned by connect and poll calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub status: SessionStatus,
}

/// Ask the wallet session to move to another cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwitchNetworkRequest {
    pub cluster: Cluster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Cluster::MainnetBeta).unwrap(),
            r#""mainnet-beta""#
        );
        assert_eq!(Cluster::Devnet.to_string(), "devnet");
    }

    #[test]
    fn test_session_status_is_tagged() {
        let json = r#"{
            "session_id": "sess-1",
            "status": "connected",
            "address": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
            "cluster": "devnet"
        }"#;
        let response: SessionResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.status,
            SessionStatus::Connected { cluster: Cluster::Devnet, .. }
        ));
    }

    #[test]
    fn test_rejected_reason_is_optional() {
        let response: SessionResponse =
            serde_json::from_str(r#"{"session_id": "sess-2", "status": "rejected"}"#).unwrap();
        assert_eq!(
            response.status,
            SessionStatus::Rejected { reason: None }
        );
    }

    #[test]
    fn test_connector_labels() {
        assert_eq!(WalletConnector::Extension.label(), "Extension Wallet");
        assert_eq!(WalletConnector::Relay.label(), "Wallet Relay");
        assert_eq!(WalletConnector::Exchange.label(), "Exchange Wallet");
    }
}
