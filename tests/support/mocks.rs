// tests/support/mocks.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use momentum_site::application::ports::email::{
    EmailError, EmailReceipt, EmailSender, OutboundEmail,
};
use momentum_site::application::ports::time::Clock;
use momentum_site::application::ports::verification::{HumanVerifier, VerificationError};

/// Fixed timestamp used by every clock in the tests.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Email sender that records every message and replays scripted failures.
/// Sends beyond the script succeed with a synthetic receipt.
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<OutboundEmail>>,
    script: Mutex<VecDeque<Result<(), EmailError>>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes for the next sends, in order.
    pub fn scripted(outcomes: Vec<Result<(), EmailError>>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            script: Mutex::new(outcomes.into()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<EmailReceipt, EmailError> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };
        let outcome = self.script.lock().unwrap().pop_front().unwrap_or(Ok(()));
        outcome.map(|()| EmailReceipt {
            message_id: format!("msg-{attempt}"),
            to: email.to.clone(),
            submitted_at: "2024-01-01T00:00:00Z".into(),
        })
    }
}

pub fn transport_failure(message: &str) -> Result<(), EmailError> {
    Err(EmailError::Transport(message.into()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierMode {
    Disabled,
    Pass,
    Reject,
    Unreachable,
}

/// Human verifier with a fixed answer. Records the tokens it was asked about.
pub struct StaticVerifier {
    mode: VerifierMode,
    tokens: Mutex<Vec<String>>,
}

impl StaticVerifier {
    pub fn new(mode: VerifierMode) -> Self {
        Self {
            mode,
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(VerifierMode::Disabled)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl HumanVerifier for StaticVerifier {
    fn is_enabled(&self) -> bool {
        self.mode != VerifierMode::Disabled
    }

    async fn verify(
        &self,
        token: &str,
        _remote_ip: Option<&str>,
    ) -> Result<bool, VerificationError> {
        self.tokens.lock().unwrap().push(token.to_string());
        match self.mode {
            VerifierMode::Disabled | VerifierMode::Pass => Ok(true),
            VerifierMode::Reject => Ok(false),
            VerifierMode::Unreachable => {
                Err(VerificationError::Transport("connection refused".into()))
            }
        }
    }
}

/// Email sender whose transport blows up mid-request.
pub struct PanickingEmailSender;

#[async_trait]
impl EmailSender for PanickingEmailSender {
    async fn send(&self, _email: &OutboundEmail) -> Result<EmailReceipt, EmailError> {
        panic!("email transport crashed");
    }
}
