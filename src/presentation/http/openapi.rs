// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::contact::submit_contact,
        crate::presentation::http::controllers::slugs::generate_slug,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::contact::ContactRequest,
            crate::presentation::http::controllers::contact::ContactResponse,
            crate::presentation::http::controllers::slugs::SlugRequest,
            crate::application::dto::SlugDto,
            crate::application::dto::EmailDispatchResult,
            crate::application::ports::email::EmailReceipt
        )
    ),
    tags(
        (name = "Contact", description = "Website contact form"),
        (name = "Slugs", description = "URL identifiers for blog posts"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Momentum Site API",
        description = "Contact form delivery and slug generation for the Momentum Business Solutions website",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

pub fn default_snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
