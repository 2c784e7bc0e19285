//! OneDrive file placement via the Graph drive API.

use super::{DeliveryError, DeliveryOutcome};

const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Upload a rendered document into a user's OneDrive folder.
///
/// `folder` is a path relative to the drive root; empty means the root
/// itself. The outcome is advisory — a non-2xx status is reported, not
/// raised.
pub async fn upload_to_onedrive(
    access_token: &str,
    user_upn: &str,
    folder: &str,
    filename: &str,
    bytes: &[u8],
) -> Result<DeliveryOutcome, DeliveryError> {
    let folder = folder.trim_matches('/');
    let url = if folder.is_empty() {
        format!("{GRAPH_BASE}/users/{user_upn}/drive/root:/{filename}:/content")
    } else {
        format!("{GRAPH_BASE}/users/{user_upn}/drive/root:/{folder}/{filename}:/content")
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let resp = client
        .put(url)
        .bearer_auth(access_token)
        .header(reqwest::header::CONTENT_TYPE, "application/pdf")
        .body(bytes.to_vec())
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let message = resp
        .text()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    Ok(DeliveryOutcome { status, message })
}
