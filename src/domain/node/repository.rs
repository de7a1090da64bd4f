use crate::domain::errors::DomainResult;
use crate::domain::language::Langcode;
use crate::domain::node::entity::{Article, Campaign};
use crate::domain::node::value_objects::NodeId;
use async_trait::async_trait;

#[async_trait]
pub trait CampaignReadRepository: Send + Sync {
    /// Campaign translation matching both `id` and `langcode`. No fallback
    /// to other languages.
    async fn find_by_id(&self, id: NodeId, langcode: &Langcode) -> DomainResult<Option<Campaign>>;
    async fn list(&self, langcode: &Langcode) -> DomainResult<Vec<Campaign>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_by_campaign(
        &self,
        campaign_id: NodeId,
        langcode: &Langcode,
    ) -> DomainResult<Vec<Article>>;
}
