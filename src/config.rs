// src/config.rs
use crate::domain::contact::BusinessIdentity;
use crate::infrastructure::{
    email::postmark::{DEFAULT_MESSAGE_STREAM, DEFAULT_POSTMARK_API_URL},
    security::turnstile::DEFAULT_TURNSTILE_VERIFY_URL,
};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    postmark_api_url: String,
    postmark_token: String,
    postmark_message_stream: String,
    mail_from: String,
    owner_inbox: String,
    email_timeout: Duration,
    turnstile_secret: Option<String>,
    turnstile_verify_url: String,
    identity: BusinessIdentity,
    rate_limit: RateLimitSettings,
}

/// Per-client request budget for the API routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:1313".into()]
}

const fn default_email_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let listen_addr = get("LISTEN_ADDR")
            .or_else(|| get("PORT").map(|port| format!("0.0.0.0:{port}")))
            .unwrap_or_else(default_listen_addr);

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let postmark_token = get("POSTMARK_TOKEN")
            .or_else(|| get("POSTMARK_API_KEY"))
            .ok_or(ConfigError::Missing("POSTMARK_TOKEN"))?;
        let owner_inbox = require("POSTMARK_TO")?;
        let mail_from = require("POSTMARK_FROM")?;

        let email_timeout_secs = match get("EMAIL_TIMEOUT_SECONDS") {
            Some(raw) => parse_number::<u64>("EMAIL_TIMEOUT_SECONDS", &raw)?,
            None => default_email_timeout_secs(),
        };
        if email_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "EMAIL_TIMEOUT_SECONDS must be greater than zero".into(),
            ));
        }

        let defaults = RateLimitSettings::default();
        let rate_limit = RateLimitSettings {
            per_second: match get("RATE_LIMIT_PER_SECOND") {
                Some(raw) => parse_number("RATE_LIMIT_PER_SECOND", &raw)?,
                None => defaults.per_second,
            },
            burst_size: match get("RATE_LIMIT_BURST") {
                Some(raw) => parse_number("RATE_LIMIT_BURST", &raw)?,
                None => defaults.burst_size,
            },
        };
        if rate_limit.per_second == 0 || rate_limit.burst_size == 0 {
            return Err(ConfigError::Invalid(
                "rate limit values must be greater than zero".into(),
            ));
        }

        let fallback = BusinessIdentity::default();
        let identity = BusinessIdentity {
            name: get("BUSINESS_NAME").unwrap_or(fallback.name),
            tagline: get("BUSINESS_TAGLINE").unwrap_or(fallback.tagline),
            email: get("BUSINESS_EMAIL").unwrap_or(fallback.email),
            phone: get("BUSINESS_PHONE").unwrap_or(fallback.phone),
            offerings: get("BUSINESS_OFFERINGS").unwrap_or(fallback.offerings),
            contact_person: get("BUSINESS_CONTACT_PERSON").unwrap_or(fallback.contact_person),
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            postmark_api_url: get("POSTMARK_API_URL")
                .unwrap_or_else(|| DEFAULT_POSTMARK_API_URL.to_string()),
            postmark_token,
            postmark_message_stream: get("POSTMARK_MESSAGE_STREAM")
                .unwrap_or_else(|| DEFAULT_MESSAGE_STREAM.to_string()),
            mail_from,
            owner_inbox,
            email_timeout: Duration::from_secs(email_timeout_secs),
            turnstile_secret: get("TURNSTILE_SECRET_KEY"),
            turnstile_verify_url: get("TURNSTILE_VERIFY_URL")
                .unwrap_or_else(|| DEFAULT_TURNSTILE_VERIFY_URL.to_string()),
            identity,
            rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn postmark_api_url(&self) -> &str {
        &self.postmark_api_url
    }

    pub fn postmark_token(&self) -> &str {
        &self.postmark_token
    }

    pub fn postmark_message_stream(&self) -> &str {
        &self.postmark_message_stream
    }

    pub fn mail_from(&self) -> &str {
        &self.mail_from
    }

    pub fn owner_inbox(&self) -> &str {
        &self.owner_inbox
    }

    pub const fn email_timeout(&self) -> Duration {
        self.email_timeout
    }

    /// Turnstile verification is only enabled when a secret is configured.
    pub fn turnstile_secret(&self) -> Option<&str> {
        self.turnstile_secret.as_deref()
    }

    pub fn turnstile_verify_url(&self) -> &str {
        &self.turnstile_verify_url
    }

    pub const fn identity(&self) -> &BusinessIdentity {
        &self.identity
    }

    pub const fn rate_limit(&self) -> RateLimitSettings {
        self.rate_limit
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer, got `{raw}`")))
}
