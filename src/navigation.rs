//! Marking the current page in the site navigation.
//!
//! The navigation fragment is a `<nav>` whose links (`nav a`) are the
//! navigation items. An item whose `href` is one of the current page's
//! equivalent URLs gets rewritten according to a [`NavigationPolicy`]; every
//! other item is left exactly as loaded.
//!
//! Annotating only touches the fragment. Grafting it into a page is a
//! separate step ([`insert_navigation`]) so the matching rules can be tested
//! without a document.
//!
//! # Example
//!
//! ```
//! use breakaway::dom::Fragment;
//! use breakaway::navigation::{NavigationAnnotator, NavigationPolicy};
//! use breakaway::url::EquivalenceSet;
//!
//! let mut nav = Fragment::parse(
//!     r#"<nav><ul><li><a href="/a">A</a></li><li><a href="/b">B</a></li></ul></nav>"#,
//! );
//! let here = EquivalenceSet::resolve(Some("/b"));
//!
//! let annotation = NavigationAnnotator::new().annotate(&mut nav, &here).unwrap();
//! assert_eq!(annotation.matched, vec!["/b".to_string()]);
//! assert!(nav.to_html().contains(r#"<li class="selected"><a href="/b">B</a></li>"#));
//! ```

use crate::dom::{ArenaDom, ArenaNodeId, Attribute, Document, Fragment, InsertPosition};
use crate::error::{Error, Result};
use crate::url::EquivalenceSet;

/// Class marking the entry for the current page.
pub const SELECTED_CLASS: &str = "selected";

/// Selector for the navigation items inside the fragment.
pub const ITEM_SELECTOR: &str = "nav a";

/// What happens to the entry that points at the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NavigationPolicy {
    /// Add `selected` to the enclosing list item; the link stays clickable.
    #[default]
    Select,
    /// Replace the link by its text and add `selected` to the enclosing list item.
    Unwrap,
}

/// How many matching entries get rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MatchMode {
    /// Every entry whose href matches.
    #[default]
    All,
    /// Only the first matching entry in document order.
    First,
}

/// Configuration for annotating navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationConfig {
    pub policy: NavigationPolicy,
    pub match_mode: MatchMode,
}

/// One entry of the navigation fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    /// The `<a>` element.
    pub link: ArenaNodeId,
    /// The href exactly as written in the fragment.
    pub href: Option<String>,
    /// Visible text of the link.
    pub text: String,
    /// Nearest enclosing `<li>`, if the link sits in a list.
    pub list_item: Option<ArenaNodeId>,
}

/// Outcome of an annotation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Hrefs of the rewritten entries, in document order.
    pub matched: Vec<String>,
    /// Number of navigation items scanned.
    pub scanned: usize,
}

/// Collect the navigation items of a fragment in document order.
///
/// Fails when the fragment has no `<nav>` element at all.
pub fn navigation_items(fragment: &Fragment) -> Result<Vec<NavigationItem>> {
    if fragment.find("nav").is_none() {
        return Err(Error::MissingElement("nav".to_string()));
    }

    let dom = fragment.dom();
    let items = fragment
        .select(ITEM_SELECTOR)?
        .into_iter()
        .map(|link| NavigationItem {
            link,
            href: dom.get_attr(link, "href").map(str::to_string),
            text: dom.text(link),
            list_item: enclosing_list_item(dom, link, fragment.container()),
        })
        .collect();
    Ok(items)
}

fn enclosing_list_item(dom: &ArenaDom, link: ArenaNodeId, stop: ArenaNodeId) -> Option<ArenaNodeId> {
    dom.ancestors(link)
        .take_while(|&id| id != stop)
        .find(|&id| dom.element_name(id).is_some_and(|n| n.as_ref() == "li"))
}

/// Rewrites the navigation entries that point at the current page.
#[derive(Debug, Clone, Default)]
pub struct NavigationAnnotator {
    config: NavigationConfig,
}

impl NavigationAnnotator {
    /// Create an annotator with the default configuration (select, all matches).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotator with the specified configuration.
    pub fn with_config(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Rewrite the entries of `fragment` whose href is in `here`.
    ///
    /// Zero matches is a normal outcome and leaves the fragment untouched.
    pub fn annotate(&self, fragment: &mut Fragment, here: &EquivalenceSet) -> Result<Annotation> {
        let items = navigation_items(fragment)?;
        let mut annotation = Annotation {
            scanned: items.len(),
            ..Annotation::default()
        };

        for item in items {
            let Some(href) = item.href.as_deref() else {
                continue;
            };
            if !here.contains(href) {
                continue;
            }

            tracing::debug!(href, text = %item.text, policy = ?self.config.policy, "marking current page");
            self.apply(fragment.dom_mut(), &item);
            annotation.matched.push(href.to_string());

            if self.config.match_mode == MatchMode::First {
                break;
            }
        }

        Ok(annotation)
    }

    fn apply(&self, dom: &mut ArenaDom, item: &NavigationItem) {
        match self.config.policy {
            NavigationPolicy::Select => {
                // Links outside a list carry the marker themselves.
                dom.add_class(item.list_item.unwrap_or(item.link), SELECTED_CLASS);
            }
            NavigationPolicy::Unwrap => {
                let text = dom.create_text(item.text.clone());
                match item.list_item {
                    Some(li) => {
                        dom.replace(item.link, text);
                        dom.add_class(li, SELECTED_CLASS);
                    }
                    None => {
                        let span = dom.create_html_element(
                            "span",
                            vec![Attribute::new("class", SELECTED_CLASS)],
                        );
                        dom.append(span, text);
                        dom.replace(item.link, span);
                    }
                }
            }
        }
    }
}

/// Graft the navigation fragment in as the first content of `<body>`.
///
/// Returns the ids of the inserted top-level nodes.
pub fn insert_navigation(document: &mut Document, fragment: &Fragment) -> Result<Vec<ArenaNodeId>> {
    let body = document.body()?;
    Ok(document.insert_fragment(body, fragment, InsertPosition::Prepend))
}
