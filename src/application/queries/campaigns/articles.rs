use super::CampaignQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Cacheable, CampaignReferenceDto},
        error::ApplicationResult,
    },
    domain::{language::Langcode, node::NodeId},
};

pub struct ListCampaignArticlesQuery {
    pub campaign_id: String,
    pub langcode: Option<String>,
}

impl CampaignQueryService {
    /// Summary of a campaign for embedding into child records.
    pub async fn load_campaign_summary(
        &self,
        id: NodeId,
        langcode: &Langcode,
    ) -> ApplicationResult<CampaignReferenceDto> {
        let campaign = self.find_campaign(id, langcode).await?;
        self.presenter.campaign_reference(&campaign)
    }

    /// Articles of one campaign. Each record repeats the campaign summary
    /// under `campaign`.
    #[tracing::instrument(skip(self, query), fields(campaign_id = %query.campaign_id, langcode = query.langcode.as_deref()))]
    pub async fn list_campaign_articles(
        &self,
        query: ListCampaignArticlesQuery,
    ) -> ApplicationResult<Cacheable<Vec<ArticleDto>>> {
        let campaign_id = self.parse_campaign_id(&query.campaign_id)?;
        let langcode = self.resolve_langcode(query.langcode.as_deref())?;

        let campaign = self.load_campaign_summary(campaign_id, &langcode).await?;

        let articles = self
            .article_repo
            .list_by_campaign(campaign_id, &langcode)
            .await?;

        let items = articles
            .iter()
            .filter(|article| article.campaign_id == campaign_id)
            .map(|article| self.presenter.article(article, campaign.clone()))
            .collect::<ApplicationResult<Vec<_>>>()?;

        tracing::debug!(count = items.len(), %campaign_id, %langcode, "listed campaign articles");
        Ok(Cacheable::new(items, &langcode)
            .with_tag(format!("node:{campaign_id}"))
            .with_tag("node_list:article"))
    }
}
