//! Email address obscuring.
//!
//! Rewrites `mailto:` links so the address does not appear verbatim in the
//! page source: the visible text has its `@` spelled out as ` at `, and the
//! address inside the href is encoded character by character. A small style
//! rule for `a.reverse` (right-to-left rendering of reversed text) is added to
//! `<head>` for pages that want to go further by hand.
//!
//! This is a best-effort deterrent against naive scrapers, not a security
//! boundary: browsers decode both encodings, and so can any harvester that
//! bothers to.

use std::fmt::Write as _;

use percent_encoding::percent_encode_byte;

use crate::dom::{Attribute, Document, serialize::escape_attr};
use crate::error::Result;

use super::Filter;

/// Class rendered right-to-left by the injected style.
pub const REVERSE_CLASS: &str = "reverse";

/// Subject appended to rewritten links unless configured otherwise.
pub const DEFAULT_SUBJECT: &str = "Hi,+Neil";

const MAILTO: &str = "mailto:";
const MAILTO_SELECTOR: &str = "a[href^=\"mailto:\"]";

/// How the address inside the `href` is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EmailEncoding {
    /// `%XX` escape of every UTF-8 byte of the address.
    #[default]
    Percent,
    /// `&#N;` numeric character reference for every character.
    Entity,
}

impl EmailEncoding {
    /// Encode an address for use after `mailto:` in a serialized attribute.
    pub fn encode(self, address: &str) -> String {
        let mut out = String::with_capacity(address.len() * 6);
        match self {
            EmailEncoding::Percent => {
                for &byte in address.as_bytes() {
                    out.push_str(percent_encode_byte(byte));
                }
            }
            EmailEncoding::Entity => {
                for c in address.chars() {
                    let _ = write!(out, "&#{};", u32::from(c));
                }
            }
        }
        out
    }
}

/// Configuration for email obscuring.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub encoding: EmailEncoding,
    /// Query appended as `?subject=...`; `None` appends nothing.
    pub subject: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            encoding: EmailEncoding::default(),
            subject: Some(DEFAULT_SUBJECT.to_string()),
        }
    }
}

/// Obscures every `mailto:` link in `<body>`.
#[derive(Debug, Clone, Default)]
pub struct EmailFilter {
    config: EmailConfig,
}

impl EmailFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Serialized `href` value for an address.
    fn href(&self, address: &str) -> String {
        let mut href = format!("{MAILTO}{}", self.config.encoding.encode(address));
        if let Some(subject) = self.config.subject.as_deref().filter(|s| !s.is_empty()) {
            href.push_str("?subject=");
            escape_attr(subject, &mut href);
        }
        href
    }

    fn inject_style(&self, document: &mut Document) -> Result<()> {
        let head = document.head()?;
        let dom = document.dom_mut();
        let style = dom.create_html_element("style", vec![Attribute::new("type", "text/css")]);
        dom.append_text(
            style,
            &format!("\n    a.{REVERSE_CLASS} {{\n        unicode-bidi: bidi-override;\n        direction: rtl;\n    }}\n"),
        );
        dom.append(head, style);
        Ok(())
    }
}

impl Filter for EmailFilter {
    fn name(&self) -> &str {
        "obscure-emails"
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        self.inject_style(document)?;

        let body = document.body()?;
        let links = document.select(body, MAILTO_SELECTOR)?;
        let dom = document.dom_mut();

        for link in &links {
            let Some(address) = dom
                .get_attr(*link, "href")
                .and_then(|href| href.strip_prefix(MAILTO))
                .map(str::to_string)
            else {
                continue;
            };

            let text = dom.text(*link);
            if text.contains('@') {
                dom.set_text_content(*link, &text.replacen('@', " at ", 1));
            }
            dom.set_attr_encoded(*link, "href", &self.href(&address));
        }

        tracing::debug!(links = links.len(), encoding = ?self.config.encoding, "obscured mailto links");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::run;

    const PAGE: &str = "<html><head></head><body><p><a href=\"mailto:me@x.io\">me@x.io</a></p></body></html>";

    #[test]
    fn test_percent_encoding() {
        assert_eq!(EmailEncoding::Percent.encode("a@b"), "%61%40%62");
        assert_eq!(EmailEncoding::Percent.encode("é"), "%C3%A9");
    }

    #[test]
    fn test_entity_encoding() {
        assert_eq!(EmailEncoding::Entity.encode("a@b"), "&#97;&#64;&#98;");
        assert_eq!(EmailEncoding::Entity.encode("é"), "&#233;");
    }

    #[test]
    fn test_rewrites_mailto_link() {
        let html = run(&EmailFilter::new(), PAGE.as_bytes()).unwrap();

        assert!(html.contains(
            "<a href=\"mailto:%6D%65%40%78%2E%69%6F?subject=Hi,+Neil\">me at x.io</a>"
        ));
        assert!(!html.contains("me@x.io"));
    }

    #[test]
    fn test_entity_href_is_written_verbatim() {
        let filter = EmailFilter::with_config(EmailConfig {
            encoding: EmailEncoding::Entity,
            subject: None,
        });
        let html = run(&filter, PAGE.as_bytes()).unwrap();

        assert!(html.contains(
            "href=\"mailto:&#109;&#101;&#64;&#120;&#46;&#105;&#111;\""
        ));
    }

    #[test]
    fn test_subject_is_attribute_escaped() {
        let filter = EmailFilter::with_config(EmailConfig {
            subject: Some("Q&A \"hi\"".to_string()),
            ..EmailConfig::default()
        });
        let html = run(&filter, PAGE.as_bytes()).unwrap();

        assert!(html.contains("?subject=Q&amp;A &quot;hi&quot;\""));
    }

    #[test]
    fn test_only_first_at_is_replaced() {
        let page = "<body><a href=\"mailto:x@y\">x@y or z@w</a></body>";
        let html = run(&EmailFilter::new(), page.as_bytes()).unwrap();

        assert!(html.contains(">x at y or z@w</a>"));
    }

    #[test]
    fn test_other_links_untouched() {
        let page = "<body><a href=\"/contact\">a@b</a><a>no href</a></body>";
        let html = run(&EmailFilter::new(), page.as_bytes()).unwrap();

        assert!(html.contains("<a href=\"/contact\">a@b</a><a>no href</a>"));
    }

    #[test]
    fn test_link_text_without_at_keeps_markup() {
        let page = "<body><a href=\"mailto:me@x.io\"><b>Write</b> me</a></body>";
        let html = run(&EmailFilter::new(), page.as_bytes()).unwrap();

        assert!(html.contains("><b>Write</b> me</a>"));
    }

    #[test]
    fn test_style_appended_to_head() {
        let page = "<html><head><title>T</title></head><body></body></html>";
        let html = run(&EmailFilter::new(), page.as_bytes()).unwrap();

        assert!(html.contains("<title>T</title><style type=\"text/css\">\n    a.reverse {"));
        assert!(html.contains("direction: rtl;\n    }\n</style></head>"));
    }
}
