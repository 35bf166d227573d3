// src/infrastructure/security/turnstile.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::application::ports::verification::{HumanVerifier, VerificationError};

pub const DEFAULT_TURNSTILE_VERIFY_URL: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

#[derive(Debug, Serialize)]
struct SiteVerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
    #[serde(rename = "remoteip", skip_serializing_if = "Option::is_none")]
    remote_ip: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Cloudflare Turnstile verifier. Without a secret key it is disabled and
/// submissions skip the check.
pub struct TurnstileVerifier {
    client: Client,
    endpoint: Url,
    secret: Option<String>,
}

impl TurnstileVerifier {
    /// # Errors
    ///
    /// Returns an error when the endpoint is not a valid URL or the HTTP
    /// client cannot be constructed.
    pub fn new(
        endpoint: &str,
        secret: Option<String>,
        timeout: Duration,
    ) -> Result<Self, VerificationError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| VerificationError::Transport(format!("invalid verify URL: {err}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| VerificationError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            secret: secret.filter(|s| !s.trim().is_empty()),
        })
    }
}

#[async_trait]
impl HumanVerifier for TurnstileVerifier {
    fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<bool, VerificationError> {
        let Some(secret) = self.secret.as_deref() else {
            tracing::debug!("turnstile secret not set, skipping verification");
            return Ok(true);
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SiteVerifyRequest {
                secret,
                response: token,
                remote_ip,
            })
            .send()
            .await
            .map_err(|err| VerificationError::Transport(err.to_string()))?;

        let decoded: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|err| VerificationError::Decode(err.to_string()))?;

        if !decoded.success {
            tracing::info!(error_codes = ?decoded.error_codes, "turnstile rejected token");
        }
        Ok(decoded.success)
    }
}
