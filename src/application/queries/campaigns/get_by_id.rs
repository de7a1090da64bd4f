use super::CampaignQueryService;
use crate::application::{
    dto::{Cacheable, CampaignDetailDto},
    error::ApplicationResult,
};

pub struct GetCampaignQuery {
    /// Raw path segment; validated here so malformed ids surface as a
    /// missing campaign.
    pub id: String,
    pub langcode: Option<String>,
}

impl CampaignQueryService {
    #[tracing::instrument(skip(self, query), fields(id = %query.id, langcode = query.langcode.as_deref()))]
    pub async fn get_campaign(
        &self,
        query: GetCampaignQuery,
    ) -> ApplicationResult<Cacheable<CampaignDetailDto>> {
        let id = self.parse_campaign_id(&query.id)?;
        let langcode = self.resolve_langcode(query.langcode.as_deref())?;

        let campaign = self.find_campaign(id, &langcode).await?;
        let detail = self.presenter.campaign_detail(&campaign)?;

        Ok(Cacheable::new(detail, &langcode).with_tag(format!("node:{id}")))
    }
}
