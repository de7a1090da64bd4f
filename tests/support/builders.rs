// tests/support/builders.rs
use super::mocks::{InMemoryContent, fixed_now};
use campaign_api::domain::{
    language::{Langcode, Language},
    node::{Article, Campaign, ImageField, NodeId, NodeMeta, NodeTitle, RichText, TextFormat},
};
use chrono::Duration;
use uuid::Uuid;

pub fn language(code: &str) -> Language {
    let name = match code {
        "en" => "English",
        "fr" => "French",
        "de" => "German",
        other => other,
    };
    Language::new(Langcode::new(code).unwrap(), name)
}

/// Metadata of one translation of node `id`.
pub struct MetaBuilder {
    id: i64,
    langcode: String,
    source: String,
    translations: Vec<String>,
    title: String,
    created_offset: Duration,
}

impl MetaBuilder {
    pub fn new(id: i64, langcode: &str) -> Self {
        Self {
            id,
            langcode: langcode.to_string(),
            source: langcode.to_string(),
            translations: vec![langcode.to_string()],
            title: format!("Node {id} ({langcode})"),
            created_offset: Duration::zero(),
        }
    }

    /// Languages the node exists in; the first one is the source language.
    pub fn translations(mut self, codes: &[&str]) -> Self {
        self.translations = codes.iter().map(|code| code.to_string()).collect();
        if let Some(first) = codes.first() {
            self.source = first.to_string();
        }
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn created_after(mut self, offset: Duration) -> Self {
        self.created_offset = offset;
        self
    }

    pub fn build(self) -> NodeMeta {
        NodeMeta {
            id: NodeId::new(self.id).unwrap(),
            // stable across translations, like the real uuid column
            uuid: Uuid::from_u128(self.id as u128),
            language: language(&self.langcode),
            default_langcode: Langcode::new(&self.source).unwrap(),
            translations: self.translations.iter().map(|code| language(code)).collect(),
            title: NodeTitle::new(self.title).unwrap(),
            created_at: fixed_now() + self.created_offset,
        }
    }
}

pub fn campaign(meta: MetaBuilder) -> Campaign {
    Campaign {
        meta: meta.build(),
        external: false,
        external_url: None,
        description: RichText::new("A short description.", TextFormat::PlainText),
        body: RichText::new("Campaign **body**.", TextFormat::Markdown),
        image: None,
    }
}

pub fn article(meta: MetaBuilder, campaign_id: i64) -> Article {
    Article {
        meta: meta.build(),
        body: RichText::new(
            "First paragraph of the article.\n\nSecond paragraph.",
            TextFormat::PlainText,
        ),
        image: None,
        campaign_id: NodeId::new(campaign_id).unwrap(),
    }
}

pub fn image(uri: &str, alt: &str) -> Option<ImageField> {
    Some(ImageField::new(uri, alt).unwrap())
}

/// Shared fixture:
///
/// - campaign 42 exists only in French;
/// - campaign 7 is authored in English, translated to French, carries an
///   image and has articles 101 and 102 in English and 103 in French;
/// - campaign 8 is English only, newer than 7, external, without articles.
pub fn sample_content() -> InMemoryContent {
    let mut campaign_42 = campaign(MetaBuilder::new(42, "fr").title("Océans propres"));
    campaign_42.description = RichText::new("Nettoyons les plages.", TextFormat::PlainText);

    let mut campaign_7_en = campaign(
        MetaBuilder::new(7, "en")
            .translations(&["en", "fr"])
            .title("Clean seas"),
    );
    campaign_7_en.image = image("public://campaigns/seas.jpg", "A beach");
    campaign_7_en.body = RichText::new("Long **campaign** body.", TextFormat::Markdown)
        .with_summary("Campaign summary.");

    let mut campaign_7_fr = campaign(
        MetaBuilder::new(7, "fr")
            .translations(&["en", "fr"])
            .title("Mers propres"),
    );
    campaign_7_fr.image = image("public://campaigns/seas.jpg", "Une plage");

    let mut campaign_8 = campaign(
        MetaBuilder::new(8, "en")
            .title("Plant trees")
            .created_after(Duration::days(1)),
    );
    campaign_8.external = true;
    campaign_8.external_url = Some("https://trees.example.org".into());

    let mut article_101 = article(MetaBuilder::new(101, "en").title("Day one"), 7);
    article_101.image = image("public://articles/day-one.png", "Volunteers");
    article_101.body = RichText::new("Full story of day one.", TextFormat::PlainText)
        .with_summary("Day one in brief.");

    let article_102 = article(
        MetaBuilder::new(102, "en")
            .title("Day two")
            .created_after(Duration::hours(1)),
        7,
    );

    let article_103 = article(MetaBuilder::new(103, "fr").title("Premier jour"), 7);

    InMemoryContent {
        campaigns: vec![campaign_42, campaign_7_en, campaign_7_fr, campaign_8],
        articles: vec![article_101, article_102, article_103],
    }
}
