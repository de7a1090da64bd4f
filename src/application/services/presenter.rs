// src/application/services/presenter.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::{
            ArticleDto, CampaignDetailDto, CampaignReferenceDto, CampaignSummaryDto,
            FormattedTextDto, ImageDto, ImageSetDto, LanguagesDto, RenderedBodyDto,
        },
        ports::{ImageStyleUrlBuilderPort, TextRendererPort, render::ViewMode},
    },
    domain::node::{Article, Campaign, ImageField, NodeMeta, RichText},
};

/// Image style backing each key of the image map.
pub const IMAGE_STYLES: ImageStyleMap = ImageStyleMap {
    large: "full",
    medium: "medium",
    thumb: "thumbnail",
};

#[derive(Debug, Clone, Copy)]
pub struct ImageStyleMap {
    pub large: &'static str,
    pub medium: &'static str,
    pub thumb: &'static str,
}

/// Turns typed nodes into response records. Shared by every campaign
/// resource so image and text handling stay identical between them.
pub struct NodePresenter {
    image_styles: Arc<ImageStyleUrlBuilderPort>,
    renderer: Arc<TextRendererPort>,
}

impl NodePresenter {
    pub fn new(image_styles: Arc<ImageStyleUrlBuilderPort>, renderer: Arc<TextRendererPort>) -> Self {
        Self {
            image_styles,
            renderer,
        }
    }

    /// `None` when the node has no image attached.
    pub fn resolve_image_styles(
        &self,
        image: Option<&ImageField>,
    ) -> ApplicationResult<Option<ImageSetDto>> {
        let Some(image) = image else {
            return Ok(None);
        };

        let derivative = |style: &str| -> ApplicationResult<ImageDto> {
            Ok(ImageDto {
                url: self.image_styles.build_url(style, image.uri())?,
                alt: image.alt().to_string(),
            })
        };

        Ok(Some(ImageSetDto {
            large: derivative(IMAGE_STYLES.large)?,
            medium: derivative(IMAGE_STYLES.medium)?,
            thumb: derivative(IMAGE_STYLES.thumb)?,
        }))
    }

    pub fn render_description(&self, text: &RichText) -> FormattedTextDto {
        FormattedTextDto {
            formatted: self.renderer.check_markup(&text.value, &text.format),
            raw: text.value.clone(),
        }
    }

    pub fn render_body(&self, text: &RichText, mode: ViewMode) -> String {
        self.renderer.render(text, mode)
    }

    pub fn languages(&self, meta: &NodeMeta) -> LanguagesDto {
        let current = &meta.language;
        let mut names = vec![(current.code.to_string(), current.name.clone())];
        for translation in &meta.translations {
            if translation.code != current.code {
                names.push((translation.code.to_string(), translation.name.clone()));
            }
        }

        LanguagesDto {
            names,
            default: meta.default_langcode.to_string(),
        }
    }

    pub fn campaign_summary(&self, campaign: &Campaign) -> ApplicationResult<CampaignSummaryDto> {
        let meta = &campaign.meta;
        Ok(CampaignSummaryDto {
            id: meta.id.into(),
            uuid: meta.uuid,
            langcode: meta.langcode().to_string(),
            languages: self.languages(meta),
            title: meta.title.to_string(),
            created: meta.created_at,
            external: campaign.external,
            external_url: campaign.external_url.clone(),
            description: self.render_description(&campaign.description),
            image: self.resolve_image_styles(campaign.image.as_ref())?,
        })
    }

    pub fn campaign_detail(&self, campaign: &Campaign) -> ApplicationResult<CampaignDetailDto> {
        Ok(CampaignDetailDto {
            summary: self.campaign_summary(campaign)?,
            body: RenderedBodyDto {
                formatted: self.render_body(&campaign.body, ViewMode::Full),
            },
        })
    }

    pub fn campaign_reference(
        &self,
        campaign: &Campaign,
    ) -> ApplicationResult<CampaignReferenceDto> {
        let meta = &campaign.meta;
        Ok(CampaignReferenceDto {
            id: meta.id.into(),
            uuid: meta.uuid,
            langcode: meta.langcode().to_string(),
            languages: self.languages(meta),
            title: meta.title.to_string(),
            created: meta.created_at,
            external: campaign.external,
            external_url: campaign.external_url.clone(),
            image: self.resolve_image_styles(campaign.image.as_ref())?,
        })
    }

    pub fn article(
        &self,
        article: &Article,
        campaign: CampaignReferenceDto,
    ) -> ApplicationResult<ArticleDto> {
        let meta = &article.meta;
        Ok(ArticleDto {
            id: meta.id.into(),
            uuid: meta.uuid,
            langcode: meta.langcode().to_string(),
            languages: self.languages(meta),
            title: meta.title.to_string(),
            created: meta.created_at,
            image: self.resolve_image_styles(article.image.as_ref())?,
            lead: self.render_body(&article.body, ViewMode::Teaser),
            body: self.render_body(&article.body, ViewMode::Full),
            campaign,
        })
    }
}
