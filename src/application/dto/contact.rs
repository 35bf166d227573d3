// src/application/dto/contact.rs
use crate::application::ports::email::{EmailError, EmailReceipt};
use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of a single send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmailDispatchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EmailReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailDispatchResult {
    pub const fn delivered(receipt: EmailReceipt) -> Self {
        Self {
            success: true,
            data: Some(receipt),
            error: None,
        }
    }

    pub fn failed(error: &EmailError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<EmailReceipt, EmailError>> for EmailDispatchResult {
    fn from(result: Result<EmailReceipt, EmailError>) -> Self {
        match result {
            Ok(receipt) => Self::delivered(receipt),
            Err(err) => Self::failed(&err),
        }
    }
}

/// Combined result of an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub first_name: String,
    pub email: String,
    pub notification: EmailDispatchResult,
    pub thank_you: EmailDispatchResult,
}

impl ContactReceipt {
    pub const fn client_email_sent(&self) -> bool {
        self.notification.success
    }

    pub const fn thank_you_email_sent(&self) -> bool {
        self.thank_you.success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Emails were dispatched for a genuine submission.
    Accepted(ContactReceipt),
    /// The honeypot caught a bot; nothing was sent.
    Discarded,
}
