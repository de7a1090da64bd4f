// tests/support/helpers.rs
use super::builders::sample_content;
use super::mocks::FailingContentRepo;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use campaign_api::application::ports::{ImageStyleUrlBuilderPort, TextRendererPort};
use campaign_api::application::services::ApplicationServices;
use campaign_api::domain::{
    language::Langcode,
    node::{ArticleReadRepository, CampaignReadRepository},
};
use campaign_api::infrastructure::{
    image_styles::PublicImageStyleUrlBuilder, rendering::FormatTextRenderer,
};
use campaign_api::presentation::http::{
    response::CachePolicy,
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const PUBLIC_FILES: &str = "https://cms.example.org/sites/default/files";
pub const PRIVATE_FILES: &str = "https://cms.example.org/system/files";

pub fn build_services<R>(repo: R) -> Arc<ApplicationServices>
where
    R: CampaignReadRepository + ArticleReadRepository + Clone + 'static,
{
    let campaign_repo: Arc<dyn CampaignReadRepository> = Arc::new(repo.clone());
    let article_repo: Arc<dyn ArticleReadRepository> = Arc::new(repo);
    let image_styles: Arc<ImageStyleUrlBuilderPort> =
        Arc::new(PublicImageStyleUrlBuilder::new(PUBLIC_FILES, PRIVATE_FILES, None));
    let renderer: Arc<TextRendererPort> = Arc::new(FormatTextRenderer::default());

    Arc::new(ApplicationServices::new(
        campaign_repo,
        article_repo,
        image_styles,
        renderer,
        Langcode::new("en").unwrap(),
    ))
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: build_services(sample_content()),
        cache_policy: CachePolicy::new(Duration::from_secs(300)),
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), RouterOptions::default())
}

/// Router whose content store is unreachable.
pub fn make_failing_router() -> axum::Router {
    let state = HttpState {
        services: build_services(FailingContentRepo),
        cache_policy: CachePolicy::default(),
    };
    build_router(state, RouterOptions::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert an error envelope with the expected status and `kind`.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_kind: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    assert_eq!(
        json["error"].as_str(),
        expected_status.canonical_reason(),
        "unexpected error field"
    );
    assert_eq!(json["kind"], expected_kind);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
