use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct ImageDto {
    pub url: String,
    pub alt: String,
}

/// The three derivatives exposed for every image.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct ImageSetDto {
    pub large: ImageDto,
    pub medium: ImageDto,
    pub thumb: ImageDto,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormattedTextDto {
    pub formatted: String,
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RenderedBodyDto {
    pub formatted: String,
}

/// Serialized as a flat object: one `<langcode>: <name>` entry per
/// available translation plus `"default": <source langcode>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagesDto {
    pub names: Vec<(String, String)>,
    pub default: String,
}

impl Serialize for LanguagesDto {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.names.len() + 1))?;
        for (code, name) in &self.names {
            map.serialize_entry(code, name)?;
        }
        map.serialize_entry("default", &self.default)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_serialize_as_flat_map() {
        let languages = LanguagesDto {
            names: vec![
                ("fr".into(), "French".into()),
                ("en".into(), "English".into()),
            ],
            default: "en".into(),
        };
        let json = serde_json::to_value(&languages).unwrap();
        assert_eq!(json["fr"], "French");
        assert_eq!(json["en"], "English");
        assert_eq!(json["default"], "en");
        assert_eq!(
            serde_json::to_string(&languages).unwrap(),
            r#"{"fr":"French","en":"English","default":"en"}"#
        );
    }
}
