//! Microsoft Graph delivery: OneDrive upload and mail with attachment.
//!
//! Delivery is advisory: every call reports a [`DeliveryOutcome`] with the
//! HTTP status and response body, and a failed upload or send never
//! invalidates the already-produced document.
//!
//! # Example
//!
//! ```ignore
//! use bestellung::graph::*;
//!
//! let token = acquire_token(&tenant_id, &client_id, &client_secret).await?;
//! let outcome = upload_to_onedrive(&token, "orders@rotogal.de",
//!     "Bestellungen/Rotogal", "B-2026-042.pdf", document.as_bytes()).await?;
//! if !outcome.is_success() {
//!     eprintln!("upload failed ({}): {}", outcome.status, outcome.message);
//! }
//! ```

mod auth;
mod mail;
mod upload;

pub use auth::acquire_token;
pub use mail::send_order_mail;
pub use upload::upload_to_onedrive;

use std::fmt;

/// Per-call delivery result: HTTP status and response body.
///
/// Non-success statuses are not errors — the caller decides how loudly to
/// report them.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    /// HTTP status code of the Graph call.
    pub status: u16,
    /// Response body, useful for diagnostics on failure.
    pub message: String,
}

impl DeliveryOutcome {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error from the Graph client before any HTTP status was obtained.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum DeliveryError {
    /// Network or connection error.
    Network(String),
    /// Token acquisition failed.
    Auth(String),
    /// Failed to parse a Graph response.
    ParseError(String),
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Graph network error: {e}"),
            Self::Auth(e) => write!(f, "Graph auth error: {e}"),
            Self::ParseError(e) => write!(f, "Graph parse error: {e}"),
        }
    }
}

impl std::error::Error for DeliveryError {}
