//! HTML serialization of the element tree
//!
//! Names are never escaped, so the serializer only writes tag and attribute
//! names that pass the HTML name rules. Configuration loading rejects bad
//! names up front via [`check_names`].

use tracing::warn;

use super::{AttrValue, Element, Node};
use crate::constants::DEFAULT_TAG;
use crate::error::{Error, Result};

/// Element name: an ASCII letter followed by letters, digits or `-`
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Attribute name: non-empty, no whitespace, controls, quotes, `<`, `>`, `/`, `=` or `&`
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&')
        })
}

/// Check every tag and attribute name in the subtree of `element`
pub fn check_names(element: &Element) -> Result<()> {
    if !is_valid_tag_name(&element.tag) {
        return Err(Error::InvalidTagName {
            name: element.tag.clone(),
        });
    }
    if let Some(name) = element.attributes.keys().find(|name| !is_valid_attr_name(name)) {
        return Err(Error::InvalidAttributeName { name: name.clone() });
    }
    element
        .children
        .iter()
        .filter_map(Node::as_element)
        .try_for_each(check_names)
}

/// Serialize a node to HTML markup
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize an element to HTML markup
pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    let tag = if is_valid_tag_name(&element.tag) {
        element.tag.as_str()
    } else {
        warn!(tag = %element.tag, fallback = DEFAULT_TAG, "Invalid tag name");
        DEFAULT_TAG
    };

    out.push('<');
    out.push_str(tag);

    if !element.classes.is_empty() {
        write_attr(out, "class", &element.class_name());
    }

    if !element.style.is_empty() {
        let style = element
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        write_attr(out, "style", &style);
    }

    for (name, value) in &element.attributes {
        if name == "class" || name == "style" {
            warn!(%name, "Attribute shadows the element field, skipping");
            continue;
        }
        if !is_valid_attr_name(name) {
            warn!(%name, "Invalid attribute name, skipping");
            continue;
        }
        match value {
            AttrValue::Null | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::String(s) => write_attr(out, name, s),
            other => write_attr(out, name, &other.to_string()),
        }
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
