use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::campaigns::CampaignReferenceDto;
use super::common::{ImageSetDto, LanguagesDto};
use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub uuid: Uuid,
    pub langcode: String,
    #[schema(value_type = Object)]
    pub languages: LanguagesDto,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
    pub image: Option<ImageSetDto>,
    /// Body rendered in teaser view mode.
    pub lead: String,
    /// Body rendered in full view mode.
    pub body: String,
    pub campaign: CampaignReferenceDto,
}
