// src/application/ports/verification.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("verification service unreachable: {0}")]
    Transport(String),
    #[error("unexpected verification response: {0}")]
    Decode(String),
}

/// Challenge check proving a form was filled in by a person.
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    /// When disabled, submissions skip verification entirely.
    fn is_enabled(&self) -> bool;

    async fn verify(&self, token: &str, remote_ip: Option<&str>)
    -> Result<bool, VerificationError>;
}
