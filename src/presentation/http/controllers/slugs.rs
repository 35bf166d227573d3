// src/presentation/http/controllers/slugs.rs
use crate::application::{dto::SlugDto, error::ApplicationError};
use crate::domain::slug::Slug;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugRequest {
    /// Blog post title to derive the slug from.
    pub title: String,
    /// Slugs already in use; the result will not collide with any of them.
    #[serde(default)]
    pub existing: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/slugs",
    request_body = SlugRequest,
    responses(
        (status = 200, description = "Slug generated.", body = SlugDto),
        (status = 400, description = "Malformed body, or the title has no usable characters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn generate_slug(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<SlugRequest>, JsonRejection>,
) -> HttpResult<Json<SlugDto>> {
    let Json(request) = payload.map_err(|err| {
        tracing::warn!(error = %err, "failed to decode slug request body");
        HttpError::bad_request("Invalid request body")
    })?;
    let raw = state
        .services
        .slug_service
        .slugify_blog_post(&request.title, &request.existing);
    let slug = Slug::new(raw)
        .map_err(ApplicationError::from)
        .into_http()?;
    Ok(Json(slug.into()))
}
