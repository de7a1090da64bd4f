// src/domain/node/entity.rs
use crate::domain::language::{Langcode, Language};
use crate::domain::node::fields::{ImageField, RichText};
use crate::domain::node::value_objects::{NodeId, NodeTitle};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Properties shared by every translated node.
#[derive(Debug, Clone)]
pub struct NodeMeta {
    pub id: NodeId,
    pub uuid: Uuid,
    pub language: Language,
    /// Language the node was originally authored in.
    pub default_langcode: Langcode,
    /// Every language the node is available in, including `language`.
    pub translations: Vec<Language>,
    pub title: NodeTitle,
    pub created_at: DateTime<Utc>,
}

impl NodeMeta {
    pub fn langcode(&self) -> &Langcode {
        &self.language.code
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub meta: NodeMeta,
    pub external: bool,
    pub external_url: Option<String>,
    /// Short description kept in the `body` field.
    pub description: RichText,
    /// Long-form content kept in `field_body`.
    pub body: RichText,
    pub image: Option<ImageField>,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub meta: NodeMeta,
    pub body: RichText,
    pub image: Option<ImageField>,
    pub campaign_id: NodeId,
}
