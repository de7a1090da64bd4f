// src/infrastructure/repositories/postgres_content.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::{Langcode, Language};
use crate::domain::node::{
    Article, ArticleReadRepository, Campaign, CampaignReadRepository, ImageField, NodeId,
    NodeMeta, NodeTitle, NodeType, RichText, TextFormat,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const NODE_SELECT: &str = "SELECT n.nid, n.uuid, n.langcode, l.name AS language_name,
        COALESCE(
            (SELECT s.langcode FROM nodes s WHERE s.nid = n.nid AND s.default_langcode LIMIT 1),
            n.langcode
        ) AS source_langcode,
        ARRAY(SELECT t.langcode FROM nodes t JOIN languages tl ON tl.code = t.langcode
              WHERE t.nid = n.nid ORDER BY tl.weight, t.langcode) AS translation_codes,
        ARRAY(SELECT tl.name FROM nodes t JOIN languages tl ON tl.code = t.langcode
              WHERE t.nid = n.nid ORDER BY tl.weight, t.langcode) AS translation_names,
        n.title, n.created, n.body_value, n.body_format,
        n.field_body_value, n.field_body_summary, n.field_body_format,
        f.uri AS image_uri, n.image_alt, n.external, n.external_url, n.campaign_nid
    FROM nodes n
    JOIN languages l ON l.code = n.langcode
    LEFT JOIN files f ON f.fid = n.image_fid";

const NODE_ORDER: &str = " ORDER BY n.created DESC, n.nid DESC";

#[derive(Clone)]
pub struct PostgresCampaignReadRepository {
    pool: PgPool,
}

impl PostgresCampaignReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NodeRow {
    nid: i64,
    uuid: Uuid,
    langcode: String,
    language_name: String,
    source_langcode: String,
    translation_codes: Vec<String>,
    translation_names: Vec<String>,
    title: String,
    created: DateTime<Utc>,
    body_value: Option<String>,
    body_format: Option<String>,
    field_body_value: Option<String>,
    field_body_summary: Option<String>,
    field_body_format: Option<String>,
    image_uri: Option<String>,
    image_alt: Option<String>,
    external: bool,
    external_url: Option<String>,
    campaign_nid: Option<i64>,
}

fn rich_text(value: Option<String>, summary: Option<String>, format: Option<String>) -> RichText {
    let format = format
        .as_deref()
        .map(TextFormat::from_machine_name)
        .unwrap_or_default();
    let text = RichText::new(value.unwrap_or_default(), format);
    match summary {
        Some(summary) => text.with_summary(summary),
        None => text,
    }
}

impl NodeRow {
    fn meta(&self) -> DomainResult<NodeMeta> {
        let language = Language::new(Langcode::new(&self.langcode)?, &self.language_name);

        let translations = self
            .translation_codes
            .iter()
            .zip(&self.translation_names)
            .map(|(code, name)| Ok(Language::new(Langcode::new(code)?, name)))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(NodeMeta {
            id: NodeId::new(self.nid)?,
            uuid: self.uuid,
            language,
            default_langcode: Langcode::new(&self.source_langcode)?,
            translations,
            title: NodeTitle::new(self.title.clone())?,
            created_at: self.created,
        })
    }

    /// A dangling file reference decodes as "no image".
    fn image(&self) -> DomainResult<Option<ImageField>> {
        self.image_uri
            .as_ref()
            .map(|uri| ImageField::new(uri.clone(), self.image_alt.clone().unwrap_or_default()))
            .transpose()
    }
}

impl TryFrom<NodeRow> for Campaign {
    type Error = DomainError;

    fn try_from(row: NodeRow) -> Result<Self, Self::Error> {
        let meta = row.meta()?;
        let image = row.image()?;
        Ok(Campaign {
            meta,
            external: row.external,
            external_url: row.external_url.filter(|url| !url.trim().is_empty()),
            description: rich_text(row.body_value, None, row.body_format),
            body: rich_text(
                row.field_body_value,
                row.field_body_summary,
                row.field_body_format,
            ),
            image,
        })
    }
}

impl TryFrom<NodeRow> for Article {
    type Error = DomainError;

    fn try_from(row: NodeRow) -> Result<Self, Self::Error> {
        let meta = row.meta()?;
        let image = row.image()?;
        let campaign_nid = row.campaign_nid.ok_or_else(|| {
            DomainError::Persistence(format!("article {} has no campaign", row.nid))
        })?;
        Ok(Article {
            meta,
            body: rich_text(
                row.field_body_value,
                row.field_body_summary,
                row.field_body_format,
            ),
            image,
            campaign_id: NodeId::new(campaign_nid)?,
        })
    }
}

#[async_trait]
impl CampaignReadRepository for PostgresCampaignReadRepository {
    async fn find_by_id(&self, id: NodeId, langcode: &Langcode) -> DomainResult<Option<Campaign>> {
        let sql = format!("{NODE_SELECT} WHERE n.type = $1 AND n.langcode = $2 AND n.nid = $3");
        let row = sqlx::query_as::<_, NodeRow>(&sql)
            .bind(NodeType::Campaign.as_str())
            .bind(langcode.as_str())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Campaign::try_from).transpose()
    }

    async fn list(&self, langcode: &Langcode) -> DomainResult<Vec<Campaign>> {
        let sql = format!("{NODE_SELECT} WHERE n.type = $1 AND n.langcode = $2{NODE_ORDER}");
        let rows = sqlx::query_as::<_, NodeRow>(&sql)
            .bind(NodeType::Campaign.as_str())
            .bind(langcode.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Campaign::try_from).collect()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list_by_campaign(
        &self,
        campaign_id: NodeId,
        langcode: &Langcode,
    ) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "{NODE_SELECT} WHERE n.type = $1 AND n.langcode = $2 AND n.campaign_nid = $3{NODE_ORDER}"
        );
        let rows = sqlx::query_as::<_, NodeRow>(&sql)
            .bind(NodeType::Article.as_str())
            .bind(langcode.as_str())
            .bind(i64::from(campaign_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> NodeRow {
        NodeRow {
            nid: 7,
            uuid: Uuid::nil(),
            langcode: "fr".into(),
            language_name: "French".into(),
            source_langcode: "en".into(),
            translation_codes: vec!["en".into(), "fr".into()],
            translation_names: vec!["English".into(), "French".into()],
            title: "Mers propres".into(),
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            body_value: Some("Description".into()),
            body_format: Some("plain_text".into()),
            field_body_value: Some("Body".into()),
            field_body_summary: None,
            field_body_format: Some("markdown".into()),
            image_uri: Some("public://campaign.jpg".into()),
            image_alt: None,
            external: true,
            external_url: Some("  ".into()),
            campaign_nid: None,
        }
    }

    #[test]
    fn campaign_row_decodes_into_typed_record() {
        let campaign = Campaign::try_from(row()).unwrap();
        assert_eq!(i64::from(campaign.meta.id), 7);
        assert_eq!(campaign.meta.langcode().as_str(), "fr");
        assert_eq!(campaign.meta.default_langcode.as_str(), "en");
        assert_eq!(campaign.meta.translations.len(), 2);
        assert_eq!(campaign.body.format, TextFormat::Markdown);
        assert_eq!(campaign.image.unwrap().alt(), "");
        assert!(campaign.external_url.is_none());
    }

    #[test]
    fn article_row_requires_campaign_reference() {
        assert!(matches!(
            Article::try_from(row()),
            Err(DomainError::Persistence(_))
        ));

        let mut with_campaign = row();
        with_campaign.campaign_nid = Some(3);
        let article = Article::try_from(with_campaign).unwrap();
        assert_eq!(i64::from(article.campaign_id), 3);
    }

    #[test]
    fn missing_file_decodes_as_no_image() {
        let mut without_file = row();
        without_file.image_uri = None;
        assert!(Campaign::try_from(without_file).unwrap().image.is_none());
    }
}
