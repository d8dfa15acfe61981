//! HTML serializer for ArenaDom.
//!
//! Follows the HTML fragment serialization algorithm: void elements get no
//! end tag, raw text elements are written unescaped, and a leading newline
//! in `pre`/`textarea`/`listing` is doubled so a reparse does not eat it.

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Serialize a whole document.
pub fn serialize_document(dom: &ArenaDom) -> String {
    let mut out = String::new();
    serialize_children(dom, dom.document(), &mut out);
    out
}

/// Serialize the children of a node (its "inner HTML").
pub fn serialize_children(dom: &ArenaDom, parent: ArenaNodeId, out: &mut String) {
    for child in dom.children(parent) {
        serialize_node(dom, child, out);
    }
}

/// Serialize a node including itself (its "outer HTML").
pub fn serialize_node(dom: &ArenaDom, id: ArenaNodeId, out: &mut String) {
    let Some(node) = dom.get(id) else {
        return;
    };

    match &node.data {
        ArenaNodeData::Document => serialize_children(dom, id, out),
        ArenaNodeData::Doctype { name, .. } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        ArenaNodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        ArenaNodeData::Text(text) => {
            let raw_parent = dom
                .element_name(node.parent)
                .is_some_and(|n| RAW_TEXT_ELEMENTS.contains(&n.as_ref()));
            if raw_parent {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        ArenaNodeData::Element { name, attrs } => {
            let tag = name.local.as_ref();
            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                write_attr(attr, out);
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            if matches!(tag, "pre" | "textarea" | "listing")
                && dom
                    .text_content(node.first_child)
                    .is_some_and(|t| t.starts_with('\n'))
            {
                out.push('\n');
            }

            serialize_children(dom, id, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn write_attr(attr: &Attribute, out: &mut String) {
    out.push(' ');
    if let Some(prefix) = &attr.name.prefix {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(&attr.name.local);
    out.push_str("=\"");
    if attr.encoded {
        out.push_str(&attr.value);
    } else {
        escape_attr(&attr.value, out);
    }
    out.push('"');
}

/// Escape text content.
pub fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
