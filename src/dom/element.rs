//! Element tree types

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TAG;

/// Attribute value forwarded to a native element
pub type AttrValue = serde_json::Value;

/// Ordered CSS declarations (property name -> value)
pub type Style = IndexMap<String, String>;

/// Stable identity of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(uuid::Uuid);

impl ElementHandle {
    /// Allocate a fresh handle
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-argument callback, shared between the config and the listeners built from it
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self) {
        (self.0)()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A node of the element tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Node {
    /// Text content
    Text(String),
    /// Nested element
    Element(Element),
}

impl Node {
    /// Concatenated text of this node and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => element.collect_text(out),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A rendered element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Identity used for focus checks; only set on component roots
    #[serde(skip)]
    pub handle: Option<ElementHandle>,
    /// Class list, order preserved
    #[serde(rename = "class", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Inline style
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub style: Style,
    /// Native attributes, in emission order
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, AttrValue>,
    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Pointer activation handler
    #[serde(skip)]
    pub on_click: Option<Callback>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            handle: None,
            classes: Vec::new(),
            style: Style::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Add a class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set an attribute in place. Re-setting an existing name keeps its
    /// position and replaces the value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Get a string attribute value
    pub fn get_attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|v| v.as_str())
    }

    /// Space-separated class attribute value
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Simulate a pointer click. Returns whether a handler ran.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn text_content_concatenates_descendants() {
        let tree = Element::new("div")
            .child("Hello, ")
            .child(Element::new("span").child("world"))
            .child(Element::new("img"))
            .child("!");

        assert_eq!(tree.text_content(), "Hello, world!");
    }

    #[test]
    fn set_attr_keeps_first_position() {
        let mut element = Element::new("div").attr("role", "region").attr("id", "a");
        element.set_attr("role", "link");

        let names: Vec<_> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["role", "id"]);
        assert_eq!(element.get_attr_str("role"), Some("link"));
    }

    #[test]
    fn click_runs_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut element = Element::new("div");
        assert!(!element.click());

        element.on_click = Some(Callback::new(move || counter.set(counter.get() + 1)));
        assert!(element.click());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn nodes_deserialize_from_text_or_table() {
        let nodes: Vec<Node> = serde_json::from_str(
            r#"["plain", {"tag": "span", "class": ["x"], "children": ["inner"]}]"#,
        )
        .expect("nodes should parse");

        assert_eq!(nodes[0], Node::Text("plain".into()));
        let span = nodes[1].as_element().expect("second node is an element");
        assert_eq!(span.tag, "span");
        assert_eq!(span.class_name(), "x");
        assert_eq!(span.text_content(), "inner");
    }

    #[test]
    fn handles_are_unique() {
        assert_ne!(ElementHandle::new(), ElementHandle::new());
    }
}
