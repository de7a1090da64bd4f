// src/presentation/http/response.rs
use crate::application::{dto::Cacheable, error::ApplicationError};
use crate::presentation::http::cache::{compute_etag, inm_matches};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use headers::{CacheControl, HeaderMapExt};
use serde::Serialize;
use std::time::Duration;

pub static CACHE_TAG: HeaderName = HeaderName::from_static("cache-tag");

/// How long clients and shared caches may reuse a response.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    max_age: Duration,
}

impl CachePolicy {
    pub fn new(max_age: Duration) -> Self {
        Self { max_age }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    fn cache_control(&self) -> CacheControl {
        if self.max_age.is_zero() {
            CacheControl::new().with_no_cache()
        } else {
            CacheControl::new().with_public().with_max_age(self.max_age)
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}

fn header_value(value: &str) -> HttpResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|err| {
        HttpError::from_error(ApplicationError::upstream(format!(
            "invalid header value {value:?}: {err}"
        )))
    })
}

/// Serialize a cacheable result as JSON with its cache metadata attached.
/// Answers `304 Not Modified` when the client already holds the same body.
pub fn cached_json<T: Serialize>(
    request_headers: &HeaderMap,
    policy: &CachePolicy,
    cacheable: Cacheable<T>,
) -> HttpResult<Response> {
    let body = serde_json::to_vec(&cacheable.data).map_err(|err| {
        HttpError::from_error(ApplicationError::upstream(format!(
            "response encoding failed: {err}"
        )))
    })?;
    let etag = compute_etag(&body);

    let mut headers = HeaderMap::new();
    headers.typed_insert(policy.cache_control());
    headers.insert(header::ETAG, header_value(&etag)?);
    headers.insert(
        header::CONTENT_LANGUAGE,
        header_value(cacheable.langcode.as_str())?,
    );
    headers.insert(
        CACHE_TAG.clone(),
        header_value(&cacheable.cache_tags.join(" "))?,
    );

    if inm_matches(request_headers, &etag) {
        return Ok((StatusCode::NOT_MODIFIED, headers).into_response());
    }

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok((StatusCode::OK, headers, Bytes::from(body)).into_response())
}
