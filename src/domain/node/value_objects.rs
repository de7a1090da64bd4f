// src/domain/node/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(i64);

impl NodeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("node id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse a path segment. Only plain decimal digits are accepted, so
    /// values such as `1e3`, ` 7` or `-1` are rejected.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Validation(format!(
                "node id must be numeric: {raw:?}"
            )));
        }
        let id = raw
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("node id out of range: {raw}")))?;
        Self::new(id)
    }
}

impl From<NodeId> for i64 {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTitle(String);

impl NodeTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content type a node row was stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Campaign,
    Article,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Campaign => "campaign",
            NodeType::Article => "article",
        }
    }
}
