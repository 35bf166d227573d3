// src/presentation/http/routes.rs
use crate::config::RateLimitSettings;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{contact, slugs},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting router options that come from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting (tests, local tooling).
    pub rate_limit: Option<RateLimitSettings>,
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let mut api = Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/slugs", post(slugs::generate_slug));

    if let Some(limits) = settings.rate_limit {
        match rate_limit_layer(limits) {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!(?limits, "invalid rate limit settings, limiter disabled"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/health", get(health))
        .merge(api)
        .layer(CatchPanicLayer::custom(contact::internal_failure))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(allowed_origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
