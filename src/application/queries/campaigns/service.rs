use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        services::NodePresenter,
    },
    domain::{
        errors::DomainError,
        language::Langcode,
        node::{ArticleReadRepository, Campaign, CampaignReadRepository, NodeId},
    },
};

pub struct CampaignQueryService {
    pub(super) campaign_repo: Arc<dyn CampaignReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) presenter: Arc<NodePresenter>,
    default_langcode: Langcode,
}

impl CampaignQueryService {
    pub fn new(
        campaign_repo: Arc<dyn CampaignReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        presenter: Arc<NodePresenter>,
        default_langcode: Langcode,
    ) -> Self {
        Self {
            campaign_repo,
            article_repo,
            presenter,
            default_langcode,
        }
    }

    pub fn default_langcode(&self) -> &Langcode {
        &self.default_langcode
    }

    /// An absent or blank `langcode` parameter selects the default language.
    pub(super) fn resolve_langcode(&self, raw: Option<&str>) -> ApplicationResult<Langcode> {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Langcode::new(value)
                .map_err(|err| ApplicationError::invalid_argument(err.to_string())),
            None => Ok(self.default_langcode.clone()),
        }
    }

    pub(super) fn parse_campaign_id(&self, raw: &str) -> ApplicationResult<NodeId> {
        NodeId::parse(raw).map_err(|err| match err {
            DomainError::Validation(_) => {
                ApplicationError::invalid_resource_id("No campaign ID supplied.")
            }
            other => ApplicationError::from(other),
        })
    }

    /// Load the campaign translation matching both `id` and `langcode`.
    /// A campaign that only exists in other languages is reported missing.
    pub(super) async fn find_campaign(
        &self,
        id: NodeId,
        langcode: &Langcode,
    ) -> ApplicationResult<Campaign> {
        let campaign = self
            .campaign_repo
            .find_by_id(id, langcode)
            .await?
            .filter(|campaign| campaign.meta.id == id && campaign.meta.langcode() == langcode);

        campaign.ok_or_else(|| {
            tracing::debug!(%id, %langcode, "campaign not found in requested language");
            ApplicationError::not_found(format!("No campaign with ID {id} could be found."))
        })
    }
}
