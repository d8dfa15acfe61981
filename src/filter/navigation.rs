//! Site navigation with the current page marked.

use crate::assets::{NAVIGATION_ASSET, ResourceLoader, load_fragment};
use crate::dom::{Document, Fragment};
use crate::error::Result;
use crate::navigation::{NavigationAnnotator, NavigationConfig, insert_navigation};
use crate::url::EquivalenceSet;

use super::Filter;

/// Configuration for the navigation filter.
#[derive(Debug, Clone, Default)]
pub struct NavigationFilterConfig {
    /// Path of the page being rendered, e.g. `blog/index.html`.
    pub source_path: Option<String>,
    pub annotation: NavigationConfig,
}

/// Annotates the navigation fragment for the current page and prepends it to
/// `<body>`.
#[derive(Debug, Clone)]
pub struct NavigationFilter {
    fragment: Fragment,
    here: EquivalenceSet,
    annotator: NavigationAnnotator,
}

impl NavigationFilter {
    /// Create a filter with no current page; nothing gets marked.
    pub fn new(fragment: Fragment) -> Self {
        Self::with_config(fragment, NavigationFilterConfig::default())
    }

    pub fn with_config(fragment: Fragment, config: NavigationFilterConfig) -> Self {
        Self {
            fragment,
            here: EquivalenceSet::resolve(config.source_path.as_deref()),
            annotator: NavigationAnnotator::with_config(config.annotation),
        }
    }

    /// Create a filter from the `navigation.html` asset.
    pub fn load(loader: &impl ResourceLoader, config: NavigationFilterConfig) -> Result<Self> {
        Ok(Self::with_config(load_fragment(loader, NAVIGATION_ASSET)?, config))
    }

    /// URLs treated as the current page.
    pub fn current_page(&self) -> &EquivalenceSet {
        &self.here
    }
}

impl Filter for NavigationFilter {
    fn name(&self) -> &str {
        "add-navigation"
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        // The loaded fragment stays pristine so the filter can be reused.
        let mut fragment = self.fragment.clone();
        let annotation = self.annotator.annotate(&mut fragment, &self.here)?;

        if annotation.matched.is_empty() {
            tracing::info!(urls = ?self.here.distinct(), "no navigation entry for current page");
        } else {
            tracing::info!(matched = ?annotation.matched, "marked current page in navigation");
        }

        insert_navigation(document, &fragment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryLoader;
    use crate::error::Error;
    use crate::filter::{run, run_all};
    use crate::navigation::NavigationPolicy;

    const NAV: &str = "<nav><ul><li><a href=\"/a\">A</a></li><li><a href=\"/b\">B</a></li></ul></nav>\n";
    const PAGE: &str = "<html><head><title>Page</title></head><body><p>hi</p></body></html>";

    fn filter(path: Option<&str>, policy: NavigationPolicy) -> NavigationFilter {
        NavigationFilter::with_config(
            Fragment::parse(NAV),
            NavigationFilterConfig {
                source_path: path.map(str::to_string),
                annotation: NavigationConfig {
                    policy,
                    ..NavigationConfig::default()
                },
            },
        )
    }

    #[test]
    fn test_marks_current_page_and_prepends() {
        let html = run(&filter(Some("/b"), NavigationPolicy::Select), PAGE.as_bytes()).unwrap();

        assert!(html.contains(
            "<body><nav><ul><li><a href=\"/a\">A</a></li><li class=\"selected\"><a href=\"/b\">B</a></li></ul></nav><p>hi</p></body>"
        ));
    }

    #[test]
    fn test_unwrap_policy() {
        let html = run(&filter(Some("/b"), NavigationPolicy::Unwrap), PAGE.as_bytes()).unwrap();

        assert!(html.contains("<li class=\"selected\">B</li>"));
        assert!(!html.contains("href=\"/b\""));
    }

    #[test]
    fn test_without_source_path_inserts_unmodified() {
        let html = run(&filter(None, NavigationPolicy::Select), PAGE.as_bytes()).unwrap();

        assert!(html.contains(&format!("<body>{}<p>hi</p>", NAV.trim_end())));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_reuse_does_not_leak_marks() {
        let filter = filter(Some("/b"), NavigationPolicy::Select);
        run(&filter, PAGE.as_bytes()).unwrap();

        let html = run_all(&[&filter], PAGE.as_bytes()).unwrap();
        assert_eq!(html.matches("selected").count(), 1);
    }

    #[test]
    fn test_fragment_without_nav_fails() {
        let bad = NavigationFilter::new(Fragment::parse("<ul><li><a href=\"/\">Home</a></li></ul>"));
        let err = run(&bad, PAGE.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::MissingElement(ref name) if name == "nav"));
    }

    #[test]
    fn test_load_from_assets() {
        let loader = MemoryLoader::new().with(NAVIGATION_ASSET, NAV);
        let config = NavigationFilterConfig {
            source_path: Some("a/index.html".to_string()),
            ..NavigationFilterConfig::default()
        };
        let filter = NavigationFilter::load(&loader, config).unwrap();

        assert!(filter.current_page().contains("/a"));
        let html = run(&filter, PAGE.as_bytes()).unwrap();
        assert!(html.contains("<li class=\"selected\"><a href=\"/a\">A</a></li>"));
    }
}
