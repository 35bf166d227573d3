// src/presentation/http/controllers/contact.rs
use crate::application::{
    commands::contact::SubmitContactCommand,
    dto::{ContactOutcome, ContactReceipt},
    error::ApplicationError,
};
use crate::domain::{
    contact::{ContactFormInput, ValidationReport},
    errors::DomainError,
};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::{ClientAddress, ContactPayload};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use std::{any::Any, collections::BTreeMap};
use utoipa::ToSchema;

const SUCCESS_MESSAGE: &str = "Message sent successfully";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Contact form fields as posted by the website. JSON `null` reads as an
/// absent field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(rename = "first-name", deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "last-name", deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "phone-number", deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(rename = "annual-revenue", deserialize_with = "null_as_default")]
    pub annual_revenue: String,
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Honeypot. Must stay empty.
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(rename = "cf-turnstile-response", deserialize_with = "null_as_default")]
    pub turnstile_response: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ContactRequest {
    /// Build a request from URL-encoded pairs. Repeated `services` keys
    /// accumulate; other repeated keys keep the last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut request = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "first-name" => request.first_name = value,
                "last-name" => request.last_name = value,
                "email" => request.email = value,
                "phone-number" => request.phone_number = value,
                "annual-revenue" => request.annual_revenue = value,
                "services" | "services[]" => request.services.push(value),
                "message" => request.message = value,
                "website" => request.website = value,
                "cf-turnstile-response" => request.turnstile_response = value,
                _ => {}
            }
        }
        request
    }

    fn into_command(self, remote_ip: Option<String>) -> SubmitContactCommand {
        SubmitContactCommand {
            form: ContactFormInput {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone_number: self.phone_number,
                annual_revenue: self.annual_revenue,
                services: self.services,
                message: self.message,
            },
            honeypot: Some(self.website),
            verification_token: Some(self.turnstile_response),
            remote_ip,
        }
    }
}

#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field name to messages, present when validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thank_you_email_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thank_you_error: Option<String>,
    /// Echoed submission on validation failure, delivery details on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl ContactResponse {
    fn accepted(receipt: ContactReceipt) -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.into()),
            client_email_sent: Some(receipt.client_email_sent()),
            thank_you_email_sent: Some(receipt.thank_you_email_sent()),
            thank_you_error: receipt.thank_you.error.clone(),
            data: Some(json!({
                "firstName": receipt.first_name,
                "email": receipt.email,
                "clientEmail": receipt.notification.data,
                "thankYouEmail": receipt.thank_you.data,
            })),
            ..Self::default()
        }
    }

    /// Bots get the same answer as people so they learn nothing.
    fn discarded() -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.into()),
            ..Self::default()
        }
    }

    fn rejected(report: ValidationReport) -> Self {
        Self {
            error: Some("Validation failed".into()),
            data: serde_json::to_value(&report.data).ok(),
            errors: Some(report.errors),
            ..Self::default()
        }
    }

    fn undelivered(error: String) -> Self {
        Self {
            error: Some(error),
            client_email_sent: Some(false),
            thank_you_email_sent: Some(false),
            ..Self::default()
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body(
        content = ContactRequest,
        content_type = "application/x-www-form-urlencoded",
        description = "Contact form fields. JSON bodies with the same field names are accepted too."
    ),
    responses(
        (status = 200, description = "Lead notification delivered.", body = ContactResponse),
        (status = 400, description = "Invalid input or failed security check.", body = ContactResponse),
        (status = 502, description = "Lead notification could not be delivered.", body = ContactResponse),
        (status = 503, description = "Security verification unavailable.", body = ContactResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    ClientAddress(remote_ip): ClientAddress,
    ContactPayload(request): ContactPayload,
) -> (StatusCode, Json<ContactResponse>) {
    let command = request.into_command(remote_ip);
    match state.services.contact_commands.submit_contact(command).await {
        Ok(ContactOutcome::Accepted(receipt)) => {
            (StatusCode::OK, Json(ContactResponse::accepted(receipt)))
        }
        Ok(ContactOutcome::Discarded) => (StatusCode::OK, Json(ContactResponse::discarded())),
        Err(err) => contact_failure(err),
    }
}

/// Turns a handler panic into the generic failure body.
pub fn internal_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::failed(GENERIC_FAILURE)),
    )
        .into_response()
}

fn contact_failure(err: ApplicationError) -> (StatusCode, Json<ContactResponse>) {
    match err {
        ApplicationError::Domain(DomainError::InvalidSubmission(report)) => (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::rejected(report)),
        ),
        ApplicationError::Delivery(message) => (
            StatusCode::BAD_GATEWAY,
            Json(ContactResponse::undelivered(message)),
        ),
        ApplicationError::Infrastructure(message) => {
            tracing::error!(error = %message, "contact submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failed(GENERIC_FAILURE)),
            )
        }
        other => {
            let http = HttpError::from_error(other);
            (http.status(), Json(ContactResponse::failed(http.message())))
        }
    }
}
