use super::CampaignQueryService;
use crate::application::{
    dto::{Cacheable, CampaignSummaryDto},
    error::ApplicationResult,
};

pub struct ListCampaignsQuery {
    pub langcode: Option<String>,
}

impl CampaignQueryService {
    /// Every campaign available in the requested language. No paging.
    #[tracing::instrument(skip(self, query), fields(langcode = query.langcode.as_deref()))]
    pub async fn list_campaigns(
        &self,
        query: ListCampaignsQuery,
    ) -> ApplicationResult<Cacheable<Vec<CampaignSummaryDto>>> {
        let langcode = self.resolve_langcode(query.langcode.as_deref())?;

        let campaigns = self.campaign_repo.list(&langcode).await?;
        let items = campaigns
            .iter()
            .map(|campaign| self.presenter.campaign_summary(campaign))
            .collect::<ApplicationResult<Vec<_>>>()?;

        tracing::debug!(count = items.len(), %langcode, "listed campaigns");
        Ok(Cacheable::new(items, &langcode).with_tag("node_list:campaign"))
    }
}
