//! Mutable HTML document model.
//!
//! html5ever does the (tolerant) parsing into an [`ArenaDom`]; the filters
//! mutate that arena through [`Document`] and [`Fragment`], and
//! [`serialize`] writes it back out as HTML.
//!
//! # Example
//!
//! ```
//! use breakaway::dom::{Document, Fragment, InsertPosition};
//!
//! let mut doc = Document::parse("<html><head></head><body><p>hi</p></body></html>");
//! let banner = Fragment::parse("<header>Site</header>");
//!
//! let body = doc.body().unwrap();
//! doc.insert_fragment(body, &banner, InsertPosition::Prepend);
//!
//! assert!(doc.to_html().contains("<body><header>Site</header><p>hi</p></body>"));
//! ```

mod arena;
mod element_ref;
pub mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};
pub use element_ref::{CompiledSelector, ElementRef, PageSelectors};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::error::{Error, Result};
use tree_sink::ArenaSink;

/// Where inserted content lands relative to the target's existing children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InsertPosition {
    /// Before the first existing child.
    #[default]
    Prepend,
    /// After the last existing child.
    Append,
}

/// Parse a complete HTML document into an arena.
pub(crate) fn parse_dom(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// A parsed target page.
#[derive(Debug, Clone)]
pub struct Document {
    dom: ArenaDom,
}

impl Document {
    /// Parse a page. Never fails: the parser recovers like a browser does.
    pub fn parse(html: &str) -> Self {
        Self {
            dom: parse_dom(html),
        }
    }

    /// Decode raw bytes (UTF-8, falling back to Windows-1252) and parse them.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&crate::util::decode_text(bytes, None))
    }

    pub fn dom(&self) -> &ArenaDom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut ArenaDom {
        &mut self.dom
    }

    /// The first element with this tag, or a structural error naming it.
    pub fn require(&self, tag: &str) -> Result<ArenaNodeId> {
        self.dom
            .find_by_tag(tag)
            .ok_or_else(|| Error::MissingElement(tag.to_string()))
    }

    pub fn head(&self) -> Result<ArenaNodeId> {
        self.require("head")
    }

    pub fn body(&self) -> Result<ArenaNodeId> {
        self.require("body")
    }

    pub fn title(&self) -> Result<ArenaNodeId> {
        self.require("title")
    }

    /// All elements below `root` matching a CSS selector, in document order.
    pub fn select(&self, root: ArenaNodeId, selector: &str) -> Result<Vec<ArenaNodeId>> {
        Ok(CompiledSelector::parse(selector)?.select(&self.dom, root))
    }

    /// Copy every top-level node of `fragment` under `parent`, keeping their order.
    ///
    /// Returns the ids of the inserted copies.
    pub fn insert_fragment(
        &mut self,
        parent: ArenaNodeId,
        fragment: &Fragment,
        position: InsertPosition,
    ) -> Vec<ArenaNodeId> {
        let anchor = match position {
            InsertPosition::Prepend => self
                .dom
                .get(parent)
                .map(|n| n.first_child)
                .unwrap_or(ArenaNodeId::NONE),
            InsertPosition::Append => ArenaNodeId::NONE,
        };

        let mut inserted = Vec::new();
        for root in fragment.roots() {
            let copy = self.dom.import(fragment.dom(), root);
            if anchor.is_some() {
                self.dom.insert_before(anchor, copy);
            } else {
                self.dom.append(parent, copy);
            }
            inserted.push(copy);
        }
        inserted
    }

    /// Serialize the whole page back to HTML.
    pub fn to_html(&self) -> String {
        serialize::serialize_document(&self.dom)
    }
}

/// A detached piece of markup meant to be inserted into a [`Document`].
///
/// Parsed as `<body>` content, so head-only elements such as `<meta>`,
/// `<link>` and `<style>` are kept where they appear.
#[derive(Debug, Clone)]
pub struct Fragment {
    dom: ArenaDom,
    container: ArenaNodeId,
}

impl Fragment {
    /// Parse markup as body content.
    ///
    /// Whitespace-only text at the very start and end of the fragment is
    /// dropped, so the first real node is the first one inserted.
    pub fn parse(html: &str) -> Self {
        let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
        let mut dom = parse_dom(&wrapped);
        let container = dom.find_by_tag("body").unwrap_or_else(|| dom.document());

        trim_edge_whitespace(&mut dom, container);
        Self { dom, container }
    }

    /// Decode raw bytes (UTF-8, falling back to Windows-1252) and parse them.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&crate::util::decode_text(bytes, None))
    }

    pub fn dom(&self) -> &ArenaDom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut ArenaDom {
        &mut self.dom
    }

    /// The node whose children are the fragment's top-level nodes.
    pub fn container(&self) -> ArenaNodeId {
        self.container
    }

    /// Top-level nodes in order.
    pub fn roots(&self) -> impl Iterator<Item = ArenaNodeId> + '_ {
        self.dom.children(self.container)
    }

    /// First element with this tag inside the fragment.
    pub fn find(&self, tag: &str) -> Option<ArenaNodeId> {
        self.dom.find_by_tag_in(self.container, tag)
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// Selectors match against the fragment only; combinators never see the
    /// parse wrapper.
    pub fn select(&self, selector: &str) -> Result<Vec<ArenaNodeId>> {
        Ok(CompiledSelector::parse(selector)?.select(&self.dom, self.container))
    }

    /// Serialize the fragment's top-level nodes.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        serialize::serialize_children(&self.dom, self.container, &mut out);
        out
    }
}

fn is_blank_text(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.text_content(id)
        .is_some_and(|t| t.chars().all(char::is_whitespace))
}

fn trim_edge_whitespace(dom: &mut ArenaDom, container: ArenaNodeId) {
    while let Some(first) = dom.children(container).next()
        && is_blank_text(dom, first)
    {
        dom.detach(first);
    }
    while let Some(last) = dom.get(container).map(|n| n.last_child)
        && is_blank_text(dom, last)
    {
        dom.detach(last);
    }
}
