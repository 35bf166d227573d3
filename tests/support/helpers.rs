// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, RecordingEmailSender, StaticVerifier};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use momentum_site::application::commands::contact::{ContactCommandService, ContactSettings};
use momentum_site::application::ports::{
    email::EmailSender, time::Clock, util::SlugGenerator, verification::HumanVerifier,
};
use momentum_site::application::services::ApplicationServices;
use momentum_site::domain::contact::BusinessIdentity;
use momentum_site::infrastructure::util::PatternSlugGenerator;
use momentum_site::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};

pub const OWNER_INBOX: &str = "owner@momentum.example";
pub const MAIL_FROM: &str = "website@momentum.example";

pub fn contact_settings() -> ContactSettings {
    ContactSettings {
        from: MAIL_FROM.into(),
        owner_inbox: OWNER_INBOX.into(),
        identity: BusinessIdentity::default(),
    }
}

pub fn contact_service(
    sender: Arc<dyn EmailSender>,
    verifier: Arc<dyn HumanVerifier>,
) -> ContactCommandService {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    ContactCommandService::new(sender, verifier, clock, contact_settings())
}

pub fn build_test_state(
    sender: Arc<dyn EmailSender>,
    verifier: Arc<dyn HumanVerifier>,
) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(PatternSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        sender,
        verifier,
        clock,
        slugger,
        contact_settings(),
    ));

    HttpState { services }
}

/// Router without rate limiting: `oneshot` requests carry no peer address.
pub fn make_test_router_with(
    sender: Arc<dyn EmailSender>,
    verifier: Arc<dyn HumanVerifier>,
) -> axum::Router {
    let state = build_test_state(sender, verifier);
    let settings = RouterSettings {
        allowed_origins: vec!["http://localhost:1313".into()],
        rate_limit: None,
    };
    build_router(state, &settings)
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(
        Arc::new(RecordingEmailSender::new()),
        Arc::new(StaticVerifier::disabled()),
    )
}

pub fn form_request(uri: &str, pairs: &[(String, String)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form");
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
