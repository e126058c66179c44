//! # Wallet Session Endpoints
//!
//! Connector flows and network switching. The actual wallet protocols
//! (extension bridge, relay pairing, exchange auth) run behind the
//! gateway; these calls only start and observe them.

use shared::dto::drop::ErrorResponse;
use shared::dto::wallet::{
    Cluster, ConnectRequest, SessionResponse, SwitchNetworkRequest, WalletConnector,
};

use super::client::SdkClient;

/// Start a connector flow. The returned session is usually `pending` and
/// must be polled with [`get_wallet_session`].
pub async fn connect_wallet(
    client: &SdkClient,
    connector: WalletConnector,
) -> Result<SessionResponse, String> {
    let request = ConnectRequest { connector };

    let response = client
        .client
        .post(format!("{}/api/wallet/connect", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<SessionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}

/// Poll an in-flight or established wallet session.
pub async fn get_wallet_session(
    client: &SdkClient,
    session_id: &str,
) -> Result<SessionResponse, String> {
    let response = client
        .client
        .get(format!(
            "{}/api/wallet/session/{}",
            client.base_url(),
            session_id
        ))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<SessionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Failed to fetch session: {}", response.status()))
    }
}

/// Ask the session's wallet to move to another cluster.
pub async fn switch_network(
    client: &SdkClient,
    session_id: &str,
    cluster: Cluster,
) -> Result<SessionResponse, String> {
    let request = SwitchNetworkRequest { cluster };

    let response = client
        .client
        .post(format!(
            "{}/api/wallet/session/{}/network",
            client.base_url(),
            session_id
        ))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<SessionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}
