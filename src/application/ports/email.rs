// src/application/ports/email.rs
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// One message handed to the transactional email provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// What the provider reported back for an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailReceipt {
    pub message_id: String,
    pub to: String,
    pub submitted_at: String,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email transport failed: {0}")]
    Transport(String),
    #[error("email provider rejected the message (status {status}, code {code}): {message}")]
    Rejected {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("unexpected email provider response: {0}")]
    Decode(String),
    #[error("email sender misconfigured: {0}")]
    Configuration(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<EmailReceipt, EmailError>;
}
