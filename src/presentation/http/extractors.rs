// src/presentation/http/extractors.rs
use crate::presentation::http::controllers::contact::ContactRequest;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use std::{convert::Infallible, net::SocketAddr};

use super::error::HttpError;

/// Contact form body, accepted either URL-encoded (repeated `services`
/// keys) or as JSON (`services` as an array).
#[derive(Debug)]
pub struct ContactPayload(pub ContactRequest);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read contact request body");
            HttpError::bad_request("Invalid request body")
        })?;

        let request = if is_json {
            serde_json::from_slice::<ContactRequest>(&bytes).map_err(|err| {
                tracing::warn!(error = %err, "failed to decode contact JSON body");
                HttpError::bad_request("Invalid request body")
            })?
        } else {
            serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes)
                .map(ContactRequest::from_pairs)
                .map_err(|err| {
                    tracing::warn!(error = %err, "failed to decode contact form body");
                    HttpError::bad_request("Invalid request body")
                })?
        };

        Ok(Self(request))
    }
}

/// Best-effort client IP: proxy headers first, then the socket peer.
#[derive(Debug, Clone, Default)]
pub struct ClientAddress(pub Option<String>);

impl<S> FromRequestParts<S> for ClientAddress
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_ip = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
        };

        let ip = header_ip("cf-connecting-ip")
            .or_else(|| header_ip("x-forwarded-for"))
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            });

        Ok(Self(ip))
    }
}
