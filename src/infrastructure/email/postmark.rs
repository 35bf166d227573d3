//! Reqwest-backed Postmark adapter.
//!
//! Owns transport details only: request serialisation, the server token
//! header, timeout and HTTP error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::application::ports::email::{EmailError, EmailReceipt, EmailSender, OutboundEmail};

pub const DEFAULT_POSTMARK_API_URL: &str = "https://api.postmarkapp.com";
pub const DEFAULT_MESSAGE_STREAM: &str = "outbound";
const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PostmarkEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
    html_body: &'a str,
    message_stream: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostmarkResponse {
    #[serde(rename = "To")]
    to: String,
    #[serde(rename = "SubmittedAt")]
    submitted_at: String,
    #[serde(rename = "MessageID")]
    message_id: String,
    #[serde(rename = "ErrorCode")]
    error_code: i64,
    #[serde(rename = "Message")]
    message: String,
}

/// Sends email through Postmark's `/email` endpoint.
pub struct PostmarkEmailSender {
    client: Client,
    endpoint: Url,
    server_token: String,
    message_stream: String,
}

impl PostmarkEmailSender {
    /// # Errors
    ///
    /// Returns [`EmailError::Configuration`] when the base URL is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        server_token: impl Into<String>,
        message_stream: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EmailError> {
        let endpoint = email_endpoint(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| EmailError::Configuration(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            server_token: server_token.into(),
            message_stream: message_stream.into(),
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn email_endpoint(base_url: &str) -> Result<Url, EmailError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|url| url.join("email"))
        .map_err(|err| EmailError::Configuration(format!("invalid Postmark URL `{base_url}`: {err}")))
}

#[async_trait]
impl EmailSender for PostmarkEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<EmailReceipt, EmailError> {
        let payload = PostmarkEmail {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            text_body: &email.text_body,
            html_body: &email.html_body,
            message_stream: &self.message_stream,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(SERVER_TOKEN_HEADER, self.server_token.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|err| EmailError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| EmailError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: PostmarkResponse = serde_json::from_slice(body.as_ref())
            .map_err(|err| EmailError::Decode(format!("invalid Postmark JSON payload: {err}")))?;
        tracing::debug!(message_id = %decoded.message_id, "postmark accepted message");

        Ok(EmailReceipt {
            message_id: decoded.message_id,
            to: decoded.to,
            submitted_at: decoded.submitted_at,
        })
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmailError {
    let decoded: PostmarkResponse = serde_json::from_slice(body).unwrap_or_default();
    let message = if decoded.message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        decoded.message
    };
    EmailError::Rejected {
        status: status.as_u16(),
        code: decoded.error_code,
        message,
    }
}
