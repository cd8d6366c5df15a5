//! Element-tree emission
//!
//! Single mode renders one element carrying every derived class. App-centered
//! mode renders an outer viewport element wrapping an inner content element.

use indexmap::IndexMap;

use crate::components::primitives::SkipLinkAnchor;
use crate::constants::{DEFAULT_CLICKABLE_ROLE, MSG_BOX, MSG_MAIN_CONTENT};
use crate::dom::{AttrValue, Element, ElementHandle, Node};
use crate::i18n::{Locale, t};

use super::classes::derive_classes;
use super::config::LayoutConfig;
use super::style::{resolve_background, style_from_attr};

/// ARIA attributes of a keyboard-reachable clickable box
fn a11y_attributes(config: &LayoutConfig, locale: Locale) -> IndexMap<String, AttrValue> {
    let mut attrs = IndexMap::new();
    if config.on_click.is_some() && config.focusable {
        let label = config
            .a11y_title
            .clone()
            .unwrap_or_else(|| t(locale, MSG_BOX));
        let role = config
            .role
            .clone()
            .unwrap_or_else(|| DEFAULT_CLICKABLE_ROLE.to_string());
        attrs.insert("tabindex".to_string(), AttrValue::from(0));
        attrs.insert("aria-label".to_string(), AttrValue::from(label));
        attrs.insert("role".to_string(), AttrValue::from(role));
    }
    attrs
}

/// Render `config` into an element tree. `handle` identifies the root
/// element for focus checks.
pub fn render_box(config: &LayoutConfig, locale: Locale, handle: Option<ElementHandle>) -> Element {
    let classes = derive_classes(config);

    let mut passthrough = config.passthrough();
    let overrides = passthrough
        .shift_remove("style")
        .and_then(|value| style_from_attr(&value));
    // A raw `class` attribute joins the derived list instead of shadowing it
    let extra_classes: Vec<String> = passthrough
        .shift_remove("class")
        .and_then(|value| value.as_str().map(|s| s.split_whitespace().map(String::from).collect()))
        .unwrap_or_default();
    let background = resolve_background(
        config.texture.as_ref(),
        config.background_image.as_deref(),
        overrides.as_ref(),
    );

    let a11y = a11y_attributes(config, locale);
    let skip_link = config
        .primary
        .then(|| SkipLinkAnchor::new(t(locale, MSG_MAIN_CONTENT)).render());

    let mut root = Element::new(if config.app_centered { "div" } else { config.tag.as_str() });
    root.handle = handle;
    root.attributes = passthrough;
    root.style = background.style;
    root.on_click = config.on_click.clone();

    let mut content: Vec<Node> = Vec::with_capacity(config.children.len() + 1);
    if let Some(overlay) = background.overlay {
        content.push(overlay.into());
    }
    content.extend(config.children.iter().cloned());

    if let Some(container_classes) = classes.container {
        root.classes = container_classes;
        if let Some(role) = &config.role {
            root.set_attr("role", role.as_str());
        }

        let mut inner = Element::new(config.tag.as_str());
        inner.classes = classes.root;
        if let Some(id) = &config.id {
            inner.set_attr("id", id.as_str());
        }
        inner.children = content;

        root.children.extend(skip_link.map(Node::from));
        root.children.push(inner.into());
    } else {
        root.classes = classes.root;
        if let Some(id) = &config.id {
            root.set_attr("id", id.as_str());
        }
        if let Some(role) = &config.role {
            root.set_attr("role", role.as_str());
        }
        if let Some(tab_index) = config.tab_index {
            root.set_attr("tabindex", tab_index);
        }

        root.children.extend(skip_link.map(Node::from));
        root.children.extend(content);
    }

    root.classes.extend(extra_classes);
    for (name, value) in a11y {
        root.set_attr(name, value);
    }

    root
}
