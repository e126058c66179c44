//! # Claim Endpoint
//!
//! The single write surface: submit a claim for (recipient, quantity).

use shared::dto::drop::{ClaimRequest, ClaimResponse, ErrorResponse};

use super::client::SdkClient;

/// Submit a claim through the gateway.
///
/// The gateway assembles the transaction, has the session's wallet sign
/// it, and broadcasts it. On failure the gateway's error message is
/// returned verbatim so the user sees what the SDK saw.
#[tracing::instrument(skip(client, request), fields(recipient = %request.recipient, quantity = request.quantity))]
pub async fn claim(
    client: &SdkClient,
    contract: &str,
    request: &ClaimRequest,
) -> Result<ClaimResponse, String> {
    tracing::info!("Submitting claim");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/drop/{}/claim", client.base_url(), contract))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Claim network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response
            .json::<ClaimResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));

        if let Ok(ref claimed) = result {
            tracing::info!(
                signature = %claimed.transaction_signature,
                duration_ms = duration.as_millis(),
                "Claim confirmed"
            );
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;

        tracing::warn!(
            status = status.as_u16(),
            error = %error.error,
            duration_ms = duration.as_millis(),
            "Claim rejected by gateway"
        );
        Err(error.error)
    }
}
