// src/presentation/http/cache.rs
use axum::http::{HeaderMap, header};
use std::borrow::Cow;

const ETAG_HEX_LEN: usize = 32;

/// Strong ETag for a serialized response body, e.g. `"3f2a..."`.
pub fn compute_etag(body: &[u8]) -> String {
    let hash = blake3::hash(body).to_hex();
    format!("\"{}\"", &hash.as_str()[..ETAG_HEX_LEN])
}

fn strip_weak_prefix(token: &str) -> &str {
    token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token)
}

/// Opaque value of an entity tag with the weak prefix, surrounding quotes
/// and backslash escapes removed.
pub fn extract_etag_value(token: &str) -> Cow<'_, str> {
    let token = strip_weak_prefix(token.trim()).trim();
    let inner = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token);

    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

pub fn weak_match(a: &str, b: &str) -> bool {
    extract_etag_value(a) == extract_etag_value(b)
}

/// Whether the request's `If-None-Match` names `actual`. Supports `*` and
/// comma separated candidate lists.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| {
            let value = value.trim();
            value == "*"
                || value
                    .split(',')
                    .map(str::trim)
                    .filter(|candidate| !candidate.is_empty())
                    .any(|candidate| weak_match(candidate, actual))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn etag_is_quoted_and_deterministic() {
        let a = compute_etag(b"{\"id\":7}");
        let b = compute_etag(b"{\"id\":7}");
        let c = compute_etag(b"{\"id\":8}");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with('"') && a.ends_with('"'));
        assert_eq!(a.len(), ETAG_HEX_LEN + 2);
    }

    #[test]
    fn weak_and_strong_forms_compare_equal() {
        assert!(weak_match("W/\"abc\"", "\"abc\""));
        assert!(weak_match("\"a\\\"b\"", "\"a\"b\""));
        assert!(!weak_match("\"abc\"", "\"abd\""));
    }

    #[test]
    fn if_none_match_supports_lists_and_wildcard() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::IF_NONE_MATCH,
            HeaderValue::from_static("\"x\", W/\"abc\""),
        );
        assert!(inm_matches(&headers, "\"abc\""));
        assert!(!inm_matches(&headers, "\"zzz\""));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
        assert!(inm_matches(&headers, "\"anything\""));

        assert!(!inm_matches(&HeaderMap::new(), "\"abc\""));
    }
}
