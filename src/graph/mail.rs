//! Outbound mail with the rendered document attached, via Graph sendMail.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use super::{DeliveryError, DeliveryOutcome};

const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";
const ATTACHMENT_ODATA_TYPE: &str = "#microsoft.graph.fileAttachment";

#[derive(Serialize)]
struct SendMailRequest {
    message: Message,
    #[serde(rename = "saveToSentItems")]
    save_to_sent_items: bool,
}

#[derive(Serialize)]
struct Message {
    subject: String,
    body: MessageBody,
    #[serde(rename = "toRecipients")]
    to_recipients: Vec<Recipient>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
}

#[derive(Serialize)]
struct MessageBody {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    content: String,
}

#[derive(Serialize)]
struct Recipient {
    #[serde(rename = "emailAddress")]
    email_address: EmailAddress,
}

#[derive(Serialize)]
struct EmailAddress {
    address: String,
}

#[derive(Serialize)]
struct Attachment {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    name: String,
    #[serde(rename = "contentType")]
    content_type: &'static str,
    #[serde(rename = "contentBytes")]
    content_bytes: String,
}

fn build_request(
    recipients: &[String],
    subject: &str,
    html_body: &str,
    attachment_name: &str,
    bytes: &[u8],
) -> SendMailRequest {
    SendMailRequest {
        message: Message {
            subject: subject.to_string(),
            body: MessageBody {
                content_type: "HTML",
                content: html_body.to_string(),
            },
            to_recipients: recipients
                .iter()
                .map(|address| Recipient {
                    email_address: EmailAddress {
                        address: address.clone(),
                    },
                })
                .collect(),
            attachments: vec![Attachment {
                odata_type: ATTACHMENT_ODATA_TYPE,
                name: attachment_name.to_string(),
                content_type: "application/pdf",
                content_bytes: BASE64.encode(bytes),
            }],
        },
        save_to_sent_items: true,
    }
}

/// Send the order by mail from `sender_upn` with the document attached.
///
/// The outcome is advisory: a rejected send is reported with its status
/// and body, never raised, and the document itself is unaffected.
pub async fn send_order_mail(
    access_token: &str,
    sender_upn: &str,
    recipients: &[String],
    subject: &str,
    html_body: &str,
    attachment_name: &str,
    bytes: &[u8],
) -> Result<DeliveryOutcome, DeliveryError> {
    let request = build_request(recipients, subject, html_body, attachment_name, bytes);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let resp = client
        .post(format!("{GRAPH_BASE}/users/{sender_upn}/sendMail"))
        .bearer_auth(access_token)
        .json(&request)
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
