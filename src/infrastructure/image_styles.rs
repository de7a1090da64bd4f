// src/infrastructure/image_styles.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::image::ImageStyleUrlBuilder,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_LEN: usize = 8;

/// Builds derivative URLs in the `styles/<style>/<scheme>/<path>` layout the
/// derivative generator serves, optionally signed with an `itok` token.
#[derive(Clone)]
pub struct PublicImageStyleUrlBuilder {
    public_base: String,
    private_base: String,
    token_key: Option<String>,
}

impl PublicImageStyleUrlBuilder {
    pub fn new(
        public_base: impl Into<String>,
        private_base: impl Into<String>,
        token_key: Option<String>,
    ) -> Self {
        Self {
            public_base: public_base.into().trim_end_matches('/').to_string(),
            private_base: private_base.into().trim_end_matches('/').to_string(),
            token_key,
        }
    }

    fn token(&self, key: &str, style: &str, uri: &str) -> ApplicationResult<String> {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|err| ApplicationError::upstream(format!("image token key: {err}")))?;
        mac.update(style.as_bytes());
        mac.update(b":");
        mac.update(uri.as_bytes());
        let digest = mac.finalize().into_bytes();

        let mut encoded = URL_SAFE_NO_PAD.encode(digest);
        encoded.truncate(TOKEN_LEN);
        Ok(encoded)
    }
}

fn valid_style_name(style: &str) -> bool {
    !style.is_empty()
        && style
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Percent-encode every path segment, keeping `/` separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

impl ImageStyleUrlBuilder for PublicImageStyleUrlBuilder {
    fn build_url(&self, style: &str, uri: &str) -> ApplicationResult<String> {
        if !valid_style_name(style) {
            return Err(ApplicationError::upstream(format!(
                "unknown image style: {style:?}"
            )));
        }

        // remote files are served as-is
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return Ok(uri.to_string());
        }

        let (scheme, target) = uri
            .split_once("://")
            .ok_or_else(|| ApplicationError::upstream(format!("malformed file uri: {uri}")))?;
        let base = match scheme {
            "public" => &self.public_base,
            "private" => &self.private_base,
            other => {
                return Err(ApplicationError::upstream(format!(
                    "unsupported stream wrapper: {other}"
                )));
            }
        };

        let target = target.trim_start_matches('/');
        if target.is_empty() {
            return Err(ApplicationError::upstream(format!("malformed file uri: {uri}")));
        }

        let mut url = format!("{base}/styles/{style}/{scheme}/{}", encode_path(target));
        if let Some(key) = &self.token_key {
            let token = self.token(key, style, uri)?;
            url.push_str("?itok=");
            url.push_str(&token);
        }

        Ok(url)
    }
}
