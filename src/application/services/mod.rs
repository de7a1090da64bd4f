// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{ImageStyleUrlBuilderPort, TextRendererPort},
        queries::campaigns::CampaignQueryService,
    },
    domain::{
        language::Langcode,
        node::{ArticleReadRepository, CampaignReadRepository},
    },
};

pub mod presenter;

pub use presenter::NodePresenter;

pub struct ApplicationServices {
    pub campaign_queries: Arc<CampaignQueryService>,
}

impl ApplicationServices {
    pub fn new(
        campaign_repo: Arc<dyn CampaignReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        image_styles: Arc<ImageStyleUrlBuilderPort>,
        renderer: Arc<TextRendererPort>,
        default_langcode: Langcode,
    ) -> Self {
        let presenter = Arc::new(NodePresenter::new(
            Arc::clone(&image_styles),
            Arc::clone(&renderer),
        ));

        let campaign_queries = Arc::new(CampaignQueryService::new(
            Arc::clone(&campaign_repo),
            Arc::clone(&article_repo),
            Arc::clone(&presenter),
            default_langcode,
        ));

        Self { campaign_queries }
    }
}
