// src/application/ports/image.rs
use crate::application::ApplicationResult;

/// Maps a stored image and a named image style to the public URL of the
/// derivative. Derivatives are generated elsewhere.
pub trait ImageStyleUrlBuilder: Send + Sync {
    fn build_url(&self, style: &str, uri: &str) -> ApplicationResult<String>;
}
