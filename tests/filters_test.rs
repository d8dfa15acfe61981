//! Filter pipeline tests.
//!
//! Runs the filters in build order over a fixture page, the way the site
//! build chains the binaries.

use breakaway::assets::{DirectoryLoader, HEADER_ASSET, NAVIGATION_ASSET};
use breakaway::dom::{Document, InsertPosition};
use breakaway::filter::{
    self, EmailConfig, EmailEncoding, EmailFilter, Filter, HeaderConfig, HeaderFilter,
    NavigationFilter, NavigationFilterConfig, TitleFilter,
};

const SITE_PAGE: &str = include_str!("fixtures/page.html");

fn fixtures() -> DirectoryLoader {
    DirectoryLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn site_filters() -> Vec<Box<dyn Filter>> {
    let loader = fixtures();
    let config = NavigationFilterConfig {
        source_path: Some("/about.html".to_string()),
        ..Default::default()
    };

    vec![
        Box::new(HeaderFilter::load(&loader).unwrap()),
        Box::new(NavigationFilter::load(&loader, config).unwrap()),
        Box::new(TitleFilter::new()),
        Box::new(EmailFilter::new()),
    ]
}

#[test]
fn test_full_pipeline() {
    let filters = site_filters();
    let refs: Vec<&dyn Filter> = filters.iter().map(|f| f.as_ref()).collect();

    let html = filter::run_all(&refs, SITE_PAGE.as_bytes()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html><html><head><meta charset=\"utf-8\">"));
    assert!(html.contains("<title>Neil K \u{b7} Breakaway</title>"));
    assert!(html.contains("<li class=\"selected\"><a href=\"/about.html\">About</a></li>"));
    assert!(html.contains(">neil at example.com</a>"));
    assert!(!html.contains("neil@example.com"));
    assert!(html.contains("a.reverse {"));
}

#[test]
fn test_pipeline_output_reparses_to_same_html() {
    let filters = site_filters();
    let refs: Vec<&dyn Filter> = filters.iter().map(|f| f.as_ref()).collect();

    let once = filter::run_all(&refs, SITE_PAGE.as_bytes()).unwrap();
    let reparsed = Document::parse(&once).to_html();

    assert_eq!(once, reparsed);
}

#[test]
fn test_chaining_serialized_runs_matches_in_process_chain() {
    let filters = site_filters();

    let mut piped = SITE_PAGE.to_string();
    for f in &filters {
        piped = filter::run(f.as_ref(), piped.as_bytes()).unwrap();
    }

    let refs: Vec<&dyn Filter> = filters.iter().map(|f| f.as_ref()).collect();
    let chained = filter::run_all(&refs, SITE_PAGE.as_bytes()).unwrap();

    assert_eq!(piped, chained);
}

#[test]
fn test_header_append_keeps_title_first() {
    let filter = HeaderFilter::load(&fixtures())
        .unwrap()
        .with_config(HeaderConfig {
            position: InsertPosition::Append,
        });
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    let title = html.find("<title>").unwrap();
    let meta = html.find("<meta charset").unwrap();
    assert!(title < meta);
}

#[test]
fn test_entity_encoded_email() {
    let filter = EmailFilter::with_config(EmailConfig {
        encoding: EmailEncoding::Entity,
        subject: None,
    });
    let html = filter::run(&filter, SITE_PAGE.as_bytes()).unwrap();

    assert!(html.contains("href=\"mailto:&#110;&#101;&#105;&#108;&#64;"));
    assert!(!html.contains("?subject="));
}

#[test]
fn test_missing_asset_names_the_file() {
    let empty = tempfile::tempdir().unwrap();
    let loader = DirectoryLoader::new(empty.path());

    let err = HeaderFilter::load(&loader).err().unwrap();
    assert!(err.to_string().contains(HEADER_ASSET));

    let err = NavigationFilter::load(&loader, Default::default()).err().unwrap();
    assert!(err.to_string().contains(NAVIGATION_ASSET));
}
