//! Navigation marking tests.
//!
//! End-to-end checks of the navigation filter through the public API:
//! fragment loading, current-page matching and insertion into the page.

use breakaway::assets::{MemoryLoader, NAVIGATION_ASSET};
use breakaway::dom::{Document, Fragment};
use breakaway::filter::{self, NavigationFilter, NavigationFilterConfig};
use breakaway::navigation::{
    MatchMode, NavigationAnnotator, NavigationConfig, NavigationPolicy, SELECTED_CLASS,
    insert_navigation, navigation_items,
};
use breakaway::url::EquivalenceSet;
use breakaway::Error;

const SITE_NAV: &str = include_str!("fixtures/navigation.html");
const SITE_PAGE: &str = include_str!("fixtures/page.html");

fn site_filter(source_path: Option<&str>, config: NavigationConfig) -> NavigationFilter {
    let loader = MemoryLoader::new().with(NAVIGATION_ASSET, SITE_NAV);
    NavigationFilter::load(
        &loader,
        NavigationFilterConfig {
            source_path: source_path.map(str::to_string),
            annotation: config,
        },
    )
    .unwrap()
}

fn selected_texts(html: &str) -> Vec<String> {
    let doc = Document::parse(html);
    let body = doc.body().unwrap();
    doc.select(body, ".selected")
        .unwrap()
        .into_iter()
        .map(|id| doc.dom().text(id))
        .collect()
}

// ============================================================================
// Concrete Scenario
// ============================================================================

#[test]
fn test_scenario_select_policy() {
    let page = b"<html><head><title>Page</title></head><body><p>hi</p></body></html>";
    let nav = Fragment::parse(
        r#"<nav><ul><li><a href="/a">A</a></li><li><a href="/b">B</a></li></ul></nav>"#,
    );
    let filter = NavigationFilter::with_config(
        nav,
        NavigationFilterConfig {
            source_path: Some("/b".to_string()),
            ..Default::default()
        },
    );

    let html = filter::run(&filter, page).unwrap();

    assert_eq!(
        html,
        concat!(
            "<html><head><title>Page</title></head><body>",
            r#"<nav><ul><li><a href="/a">A</a></li><li class="selected"><a href="/b">B</a></li></ul></nav>"#,
            "<p>hi</p></body></html>"
        )
    );
}

// ============================================================================
// Fixture Site
// ============================================================================

#[test]
fn test_blog_index_marks_blog_entry() {
    let filter = site_filter(Some("blog/index.html"), NavigationConfig::default());
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    assert_eq!(selected_texts(&html), vec!["Blog"]);
    assert!(html.contains(r#"<li class="selected"><a href="/blog/">Blog</a></li>"#));
}

#[test]
fn test_root_index_marks_home() {
    let filter = site_filter(Some("index.html"), NavigationConfig::default());
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    assert_eq!(selected_texts(&html), vec!["Home"]);
}

#[test]
fn test_unknown_page_marks_nothing() {
    let filter = site_filter(Some("drafts/wip.html"), NavigationConfig::default());
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    assert!(selected_texts(&html).is_empty());
    assert!(html.contains(SITE_NAV.trim_end()));
}

#[test]
fn test_unwrap_leaves_no_link_to_current_page() {
    let config = NavigationConfig {
        policy: NavigationPolicy::Unwrap,
        ..Default::default()
    };
    let filter = site_filter(Some("/about.html"), config);
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    assert!(html.contains(r#"<li class="selected">About</li>"#));
    assert!(!html.contains(r#"href="/about.html""#));
    assert!(html.contains(r#"<a href="/blog/">Blog</a>"#));
}

#[test]
fn test_navigation_is_first_body_child() {
    let filter = site_filter(None, NavigationConfig::default());
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    let doc = Document::parse(&html);
    let body = doc.body().unwrap();
    let first = doc.dom().children(body).next().unwrap();
    assert_eq!(doc.dom().element_name(first).unwrap().as_ref(), "nav");
}

#[test]
fn test_page_without_body_markup_still_gets_navigation() {
    let filter = site_filter(Some("/"), NavigationConfig::default());
    let html = filter::run(&filter, b"<title>bare</title>").unwrap();

    assert!(html.contains("<body><nav>"));
    assert_eq!(selected_texts(&html), vec!["Home"]);
}

#[test]
fn test_frameset_page_is_rejected() {
    let filter = site_filter(Some("/"), NavigationConfig::default());
    let err = filter::run(&filter, b"<html><head></head><frameset></frameset></html>").unwrap_err();

    assert!(matches!(err, Error::MissingElement(ref name) if name == "body"));
    assert_eq!(err.to_string(), "missing required element: <body>");
}

// ============================================================================
// Annotator Without a Document
// ============================================================================

#[test]
fn test_annotator_duplicates_and_match_modes() {
    let markup = r#"<nav><ul><li><a href="/x">X</a></li><li><a href="/x">X again</a></li></ul></nav>"#;
    let here = EquivalenceSet::resolve(Some("/x"));

    let mut all = Fragment::parse(markup);
    let annotation = NavigationAnnotator::new().annotate(&mut all, &here).unwrap();
    assert_eq!(annotation.matched.len(), 2);

    let mut first = Fragment::parse(markup);
    let annotation = NavigationAnnotator::with_config(NavigationConfig {
        match_mode: MatchMode::First,
        ..Default::default()
    })
    .annotate(&mut first, &here)
    .unwrap();
    assert_eq!(annotation.matched.len(), 1);

    let items = navigation_items(&first).unwrap();
    let marked: Vec<bool> = items
        .iter()
        .map(|item| first.dom().has_class(item.list_item.unwrap(), SELECTED_CLASS))
        .collect();
    assert_eq!(marked, vec![true, false]);
}

#[test]
fn test_insert_navigation_copies_fragment() {
    let mut doc = Document::parse("<body><main>content</main></body>");
    let fragment = Fragment::parse(SITE_NAV);

    insert_navigation(&mut doc, &fragment).unwrap();
    insert_navigation(&mut doc, &fragment).unwrap();

    assert_eq!(doc.to_html().matches("<nav>").count(), 2);
    assert_eq!(fragment.to_html(), SITE_NAV.trim_end());
}
