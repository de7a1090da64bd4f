// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::campaigns,
    error::HttpError,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    response::IntoResponse,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use super::response::CACHE_TAG;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            rate_limit: false,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let exposed: [HeaderName; 3] = [header::ETAG, header::CONTENT_LANGUAGE, CACHE_TAG.clone()];
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(exposed)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/v0/campaign", get(campaigns::list_campaigns))
        .route("/v0/campaign/{id}", get(campaigns::get_campaign))
        .route(
            "/v0/campaign/{id}/article",
            get(campaigns::list_campaign_articles),
        )
        .fallback(not_found);

    if options.rate_limit {
        match rate_limit_layer() {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected; serving without limits"),
        }
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
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

async fn not_found() -> impl IntoResponse {
    HttpError::path_not_found()
}
