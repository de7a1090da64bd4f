use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{FormattedTextDto, ImageSetDto, LanguagesDto, RenderedBodyDto};
use super::serde_time;

/// Record returned by the campaign listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignSummaryDto {
    pub id: i64,
    pub uuid: Uuid,
    pub langcode: String,
    #[schema(value_type = Object)]
    pub languages: LanguagesDto,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
    pub external: bool,
    pub external_url: Option<String>,
    pub description: FormattedTextDto,
    pub image: Option<ImageSetDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignDetailDto {
    #[serde(flatten)]
    pub summary: CampaignSummaryDto,
    pub body: RenderedBodyDto,
}

/// Campaign summary embedded in every article record. Carries no
/// description or body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignReferenceDto {
    pub id: i64,
    pub uuid: Uuid,
    pub langcode: String,
    #[schema(value_type = Object)]
    pub languages: LanguagesDto,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
    pub external: bool,
    pub external_url: Option<String>,
    pub image: Option<ImageSetDto>,
}
