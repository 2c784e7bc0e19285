//! Client-credentials token acquisition against Microsoft Entra ID.

use serde::Deserialize;

use super::DeliveryError;

const AUTHORITY_BASE: &str = "https://login.microsoftonline.com";
const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Acquire an application access token for the Graph API.
///
/// Uses the OAuth2 client-credentials flow; the returned bearer token is
/// passed to [`upload_to_onedrive`](super::upload_to_onedrive) and
/// [`send_order_mail`](super::send_order_mail).
///
/// # Errors
///
/// `DeliveryError::Network` on connection issues, `DeliveryError::Auth`
/// when the identity platform rejects the credentials.
pub async fn acquire_token(
    tenant_id: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, DeliveryError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let resp = client
        .post(format!("{AUTHORITY_BASE}/{tenant_id}/oauth2/v2.0/token"))
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e: serde_json::Error| DeliveryError::ParseError(e.to_string()))?;

    match token.access_token {
        Some(access_token) => Ok(access_token),
        None => Err(DeliveryError::Auth(
            token
                .error_description
                .or(token.error)
                .unwrap_or_else(|| "no access token in response".into()),
        )),
    }
}
