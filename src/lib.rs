//! # breakaway
//!
//! Small HTML filters for a static site build: each one reads a page, applies
//! a single DOM mutation and writes the page back out, so they compose with
//! ordinary shell pipes.
//!
//! ## Filters
//!
//! - [`filter::HeaderFilter`] inserts the shared `header.html` boilerplate into `<head>`
//! - [`filter::TitleFilter`] prefixes the page `<title>` with the site name
//! - [`filter::NavigationFilter`] prepends `navigation.html` to `<body>`, with the
//!   entry for the current page marked
//! - [`filter::EmailFilter`] obscures `mailto:` links
//!
//! ## Quick Start
//!
//! ```
//! use breakaway::dom::Fragment;
//! use breakaway::filter::{self, NavigationFilter, NavigationFilterConfig};
//!
//! let nav = Fragment::parse(r#"<nav><ul><li><a href="/">Home</a></li></ul></nav>"#);
//! let config = NavigationFilterConfig {
//!     source_path: Some("index.html".into()),
//!     ..Default::default()
//! };
//!
//! let page = b"<html><head></head><body><p>hi</p></body></html>";
//! let html = filter::run(&NavigationFilter::with_config(nav, config), page).unwrap();
//! assert!(html.contains(r#"<body><nav><ul><li class="selected">"#));
//! ```

pub mod assets;
pub mod dom;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod url;
pub(crate) mod util;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use filter::Filter;
