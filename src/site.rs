use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Site metadata resolved once per process. Errors fall back to the
/// compiled-in defaults so the page always renders.
pub static SITE: LazyLock<SiteMeta> = LazyLock::new(|| match load_meta() {
    Ok(meta) => meta,
    Err(e) => {
        log::warn!("using default site metadata: {e}");
        SiteMeta::default()
    }
});

#[derive(Embed)]
#[folder = "site"]
struct Assets;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta {
            title: "Julien Sanmartin".to_string(),
            description: "Personal site of Julien Sanmartin, Software Engineer".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum SiteError {
    #[error("Site metadata file not found")]
    NotFound,
    #[error("Couldn't parse site metadata: {0}")]
    Parse(String),
}

fn load_meta() -> Result<SiteMeta, SiteError> {
    let raw = Assets::get("site.toml").ok_or(SiteError::NotFound)?;
    let content =
        String::from_utf8(raw.data.into()).map_err(|e| SiteError::Parse(e.to_string()))?;
    parse_meta(&content)
}

fn parse_meta(content: &str) -> Result<SiteMeta, SiteError> {
    toml::from_str(content).map_err(|e: toml::de::Error| SiteError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_metadata_parses() {
        let meta = load_meta().expect("embedded site.toml should parse");
        assert_eq!(meta.title, "Julien Sanmartin");
        assert!(!meta.description.is_empty());
    }

    #[test]
    fn test_static_resolves_to_embedded_values() {
        assert_eq!(SITE.title, "Julien Sanmartin");
    }

    #[test]
    fn test_malformed_metadata_is_a_parse_error() {
        let res = parse_meta("title = ");
        assert!(matches!(res, Err(SiteError::Parse(_))));

        // missing required fields is also a parse error, not a panic
        let res = parse_meta("title = \"Someone\"");
        assert!(matches!(res, Err(SiteError::Parse(_))));
    }

    #[test]
    fn test_default_still_renders_a_title() {
        // the fallback used when loading fails
        let meta = SiteMeta::default();
        assert_eq!(meta.title, "Julien Sanmartin");
        assert!(!meta.description.is_empty());
    }
}
