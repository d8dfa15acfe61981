//! Site name prefix for page titles.

use crate::dom::Document;
use crate::error::Result;

use super::Filter;

/// Prefix used when none is configured.
pub const DEFAULT_TITLE_PREFIX: &str = "Neil K \u{b7} ";

/// Configuration for title prefixing.
#[derive(Debug, Clone)]
pub struct TitleConfig {
    pub prefix: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }
}

/// Prepends a text node to the page's `<title>`.
///
/// Not idempotent: running it twice prefixes twice.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    config: TitleConfig,
}

impl TitleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TitleConfig) -> Self {
        Self { config }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "add-title"
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        let title = document.title()?;
        let dom = document.dom_mut();
        let prefix = dom.create_text(self.config.prefix.clone());
        dom.prepend(title, prefix);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filter::{run, run_all};

    #[test]
    fn test_prefixes_title() {
        let html = run(&TitleFilter::new(), b"<title>Page</title>").unwrap();
        assert!(html.contains("<title>Neil K \u{b7} Page</title>"));
    }

    #[test]
    fn test_applying_twice_prefixes_twice() {
        let filter = TitleFilter::new();
        let html = run_all(&[&filter, &filter], b"<title>Page</title>").unwrap();

        assert!(html.contains("<title>Neil K \u{b7} Neil K \u{b7} Page</title>"));
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let filter = TitleFilter::with_config(TitleConfig {
            prefix: "A & B: ".to_string(),
        });
        let html = run(&filter, b"<title>C</title>").unwrap();

        assert!(html.contains("<title>A &amp; B: C</title>"));
    }

    #[test]
    fn test_empty_title_gets_prefix() {
        let html = run(&TitleFilter::new(), b"<head><title></title></head>").unwrap();
        assert!(html.contains("<title>Neil K \u{b7} </title>"));
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let err = run(&TitleFilter::new(), b"<p>untitled</p>").unwrap_err();
        assert!(matches!(err, Error::MissingElement(ref name) if name == "title"));
    }
}
