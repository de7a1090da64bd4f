use crate::domain::language::Langcode;

/// A query result together with the cache dependencies an output cache
/// should key it on.
#[derive(Debug, Clone)]
pub struct Cacheable<T> {
    pub data: T,
    pub langcode: Langcode,
    pub cache_tags: Vec<String>,
}

impl<T> Cacheable<T> {
    /// Every result depends on the language it was resolved in.
    pub fn new(data: T, langcode: &Langcode) -> Self {
        Self {
            data,
            langcode: langcode.clone(),
            cache_tags: vec![format!("langcode:{langcode}")],
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.cache_tags.contains(&tag) {
            self.cache_tags.push(tag);
        }
        self
    }
}
