//! Shared `<head>` boilerplate.

use crate::assets::{HEADER_ASSET, ResourceLoader, load_fragment};
use crate::dom::{Document, Fragment, InsertPosition};
use crate::error::Result;

use super::Filter;

/// Configuration for header injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderConfig {
    /// Where the boilerplate lands among the existing `<head>` children.
    pub position: InsertPosition,
}

/// Inserts the boilerplate header fragment into every page's `<head>`.
#[derive(Debug, Clone)]
pub struct HeaderFilter {
    fragment: Fragment,
    config: HeaderConfig,
}

impl HeaderFilter {
    /// Create a filter inserting `fragment` with the default configuration.
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            config: HeaderConfig::default(),
        }
    }

    /// Create a filter from the `header.html` asset.
    pub fn load(loader: &impl ResourceLoader) -> Result<Self> {
        Ok(Self::new(load_fragment(loader, HEADER_ASSET)?))
    }

    /// Configure the filter with custom settings.
    pub fn with_config(mut self, config: HeaderConfig) -> Self {
        self.config = config;
        self
    }
}

impl Filter for HeaderFilter {
    fn name(&self) -> &str {
        "add-header"
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        let head = document.head()?;
        let inserted = document.insert_fragment(head, &self.fragment, self.config.position);
        tracing::debug!(nodes = inserted.len(), position = ?self.config.position, "inserted header");
        Ok(())
    }
}
