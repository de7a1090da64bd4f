// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::campaigns::list_campaigns,
        crate::presentation::http::controllers::campaigns::get_campaign,
        crate::presentation::http::controllers::campaigns::list_campaign_articles,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::campaigns::LanguageParams,
            crate::application::dto::CampaignSummaryDto,
            crate::application::dto::CampaignDetailDto,
            crate::application::dto::CampaignReferenceDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ImageSetDto,
            crate::application::dto::ImageDto,
            crate::application::dto::FormattedTextDto,
            crate::application::dto::RenderedBodyDto
        )
    ),
    tags(
        (name = "Campaigns", description = "Campaign and campaign article resources"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Campaign API",
        description = "Read-only access to multilingual campaigns and their articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (serving the document at `/openapi.json`) and
/// Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Snapshot path from `OPENAPI_SNAPSHOT_PATH`, or the default.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
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
