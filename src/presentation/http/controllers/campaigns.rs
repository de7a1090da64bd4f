// src/presentation/http/controllers/campaigns.rs
use crate::application::queries::campaigns::{
    GetCampaignQuery, ListCampaignArticlesQuery, ListCampaignsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::response::cached_json;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Path, Query},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LanguageParams {
    /// Language of the returned translations. Falls back to the site
    /// default language when absent or blank.
    #[serde(default)]
    pub langcode: Option<String>,
}

#[utoipa::path(
    get,
    path = "/v0/campaign",
    params(LanguageParams),
    responses(
        (status = 200, description = "Campaigns available in the requested language.", body = [crate::application::dto::CampaignSummaryDto]),
        (status = 304, description = "The cached representation is still current."),
        (status = 400, description = "Malformed langcode.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Campaigns"
)]
pub async fn list_campaigns(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LanguageParams>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let result = state
        .services
        .campaign_queries
        .list_campaigns(ListCampaignsQuery {
            langcode: params.langcode,
        })
        .await
        .into_http()?;

    cached_json(&headers, &state.cache_policy, result)
}

#[utoipa::path(
    get,
    path = "/v0/campaign/{id}",
    params(
        ("id" = String, Path, description = "Numeric campaign node id"),
        LanguageParams
    ),
    responses(
        (status = 200, description = "The campaign translation.", body = crate::application::dto::CampaignDetailDto),
        (status = 304, description = "The cached representation is still current."),
        (status = 400, description = "Malformed langcode.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No campaign with this id in the requested language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Campaigns"
)]
pub async fn get_campaign(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<LanguageParams>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let result = state
        .services
        .campaign_queries
        .get_campaign(GetCampaignQuery {
            id,
            langcode: params.langcode,
        })
        .await
        .into_http()?;

    cached_json(&headers, &state.cache_policy, result)
}

#[utoipa::path(
    get,
    path = "/v0/campaign/{id}/article",
    params(
        ("id" = String, Path, description = "Numeric campaign node id"),
        LanguageParams
    ),
    responses(
        (status = 200, description = "Articles of the campaign, each embedding the campaign summary.", body = [crate::application::dto::ArticleDto]),
        (status = 304, description = "The cached representation is still current."),
        (status = 400, description = "Malformed langcode.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No campaign with this id in the requested language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Campaigns"
)]
pub async fn list_campaign_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<LanguageParams>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let result = state
        .services
        .campaign_queries
        .list_campaign_articles(ListCampaignArticlesQuery {
            campaign_id: id,
            langcode: params.langcode,
        })
        .await
        .into_http()?;

    cached_json(&headers, &state.cache_policy, result)
}
