//! Page filters.
//!
//! Each filter applies one focused mutation to a parsed [`Document`]. The
//! binaries wrap exactly one filter each and are chained by the shell, but
//! filters can also be chained in-process with [`run_all`].
//!
//! Filters follow a builder pattern:
//! - `new()` creates a filter with default configuration
//! - `with_config()` allows customization
//! - `apply()` mutates a document in place
//!
//! # Example
//!
//! ```
//! use breakaway::filter::{self, TitleFilter};
//!
//! let html = filter::run(&TitleFilter::new(), b"<title>Home</title>").unwrap();
//! assert!(html.contains("<title>Neil K \u{b7} Home</title>"));
//! ```

use crate::dom::Document;
use crate::error::Result;

mod email;
mod header;
mod navigation;
mod title;

pub use email::{EmailConfig, EmailEncoding, EmailFilter, DEFAULT_SUBJECT, REVERSE_CLASS};
pub use header::{HeaderConfig, HeaderFilter};
pub use navigation::{NavigationFilter, NavigationFilterConfig};
pub use title::{DEFAULT_TITLE_PREFIX, TitleConfig, TitleFilter};

/// A single document mutation.
pub trait Filter {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Mutate the document in place.
    ///
    /// On error the document may be partially mutated and must not be
    /// serialized.
    fn apply(&self, document: &mut Document) -> Result<()>;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        (**self).apply(document)
    }
}

/// Decode and parse `input`, apply one filter, and serialize the result.
pub fn run<F: Filter + ?Sized>(filter: &F, input: &[u8]) -> Result<String> {
    run_all(&[&filter as &dyn Filter], input)
}

/// Like [`run`], applying several filters in order to the same document.
pub fn run_all(filters: &[&dyn Filter], input: &[u8]) -> Result<String> {
    let mut document = Document::from_bytes(input);
    tracing::debug!(bytes = input.len(), nodes = document.dom().len(), "parsed document");

    for filter in filters {
        filter.apply(&mut document)?;
        tracing::info!(filter = filter.name(), "applied filter");
    }

    Ok(document.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Marker(&'static str);

    impl Filter for Marker {
        fn name(&self) -> &str {
            "marker"
        }

        fn apply(&self, document: &mut Document) -> Result<()> {
            let body = document.body()?;
            document.dom_mut().append_text(body, self.0);
            Ok(())
        }
    }

    #[test]
    fn test_run_applies_and_serializes() {
        let html = run(&Marker("!"), b"<p>hi</p>").unwrap();
        assert_eq!(html, "<html><head></head><body><p>hi</p>!</body></html>");
    }

    #[test]
    fn test_run_all_keeps_order() {
        let html = run_all(&[&Marker("1"), &Marker("2")], b"<body></body>").unwrap();
        assert!(html.contains("<body>12</body>"));
    }

    #[test]
    fn test_run_stops_on_error() {
        let frameset = b"<html><head></head><frameset></frameset></html>";
        let err = run_all(&[&Marker("1"), &Marker("2")], frameset).unwrap_err();
        assert!(matches!(err, Error::MissingElement(_)));
    }
}
