// tests/support/mocks/content_repos.rs
use async_trait::async_trait;
use campaign_api::domain::{
    errors::{DomainError, DomainResult},
    language::Langcode,
    node::{Article, ArticleReadRepository, Campaign, CampaignReadRepository, NodeId, NodeMeta},
};
use std::cmp::Reverse;

/// In-memory content store holding every translation as its own record, the
/// way the nodes table does.
#[derive(Default, Clone)]
pub struct InMemoryContent {
    pub campaigns: Vec<Campaign>,
    pub articles: Vec<Article>,
}

fn newest_first(meta: &NodeMeta) -> Reverse<(chrono::DateTime<chrono::Utc>, i64)> {
    Reverse((meta.created_at, i64::from(meta.id)))
}

#[async_trait]
impl CampaignReadRepository for InMemoryContent {
    async fn find_by_id(&self, id: NodeId, langcode: &Langcode) -> DomainResult<Option<Campaign>> {
        Ok(self
            .campaigns
            .iter()
            .find(|campaign| campaign.meta.id == id && campaign.meta.langcode() == langcode)
            .cloned())
    }

    async fn list(&self, langcode: &Langcode) -> DomainResult<Vec<Campaign>> {
        let mut items: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|campaign| campaign.meta.langcode() == langcode)
            .cloned()
            .collect();
        items.sort_by_key(|campaign| newest_first(&campaign.meta));
        Ok(items)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryContent {
    async fn list_by_campaign(
        &self,
        campaign_id: NodeId,
        langcode: &Langcode,
    ) -> DomainResult<Vec<Article>> {
        let mut items: Vec<Article> = self
            .articles
            .iter()
            .filter(|article| {
                article.campaign_id == campaign_id && article.meta.langcode() == langcode
            })
            .cloned()
            .collect();
        items.sort_by_key(|article| newest_first(&article.meta));
        Ok(items)
    }
}

/// Content store whose every call fails the way a lost database does.
#[derive(Default, Clone, Copy)]
pub struct FailingContentRepo;

fn unavailable() -> DomainError {
    DomainError::Persistence("database connection pool timed out (secret=hunter2)".into())
}

#[async_trait]
impl CampaignReadRepository for FailingContentRepo {
    async fn find_by_id(&self, _: NodeId, _: &Langcode) -> DomainResult<Option<Campaign>> {
        Err(unavailable())
    }

    async fn list(&self, _: &Langcode) -> DomainResult<Vec<Campaign>> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingContentRepo {
    async fn list_by_campaign(&self, _: NodeId, _: &Langcode) -> DomainResult<Vec<Article>> {
        Err(unavailable())
    }
}
