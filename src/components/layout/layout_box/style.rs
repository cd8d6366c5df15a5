//! Background and texture resolution

use crate::constants::BOX_TEXTURE_CLASS;
use crate::dom::{AttrValue, Element, Style};

use super::config::Texture;

/// Computed visual treatment of a box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxStyle {
    /// Inline style of the visible surface
    pub style: Style,
    /// Wrapper for a node-typed texture, rendered ahead of the children
    pub overlay: Option<Element>,
}

/// Resolve `texture` / `background_image` into inline style and an optional
/// overlay. `overrides` are merged last and win.
pub fn resolve_background(
    texture: Option<&Texture>,
    background_image: Option<&str>,
    overrides: Option<&Style>,
) -> BoxStyle {
    let mut style = Style::new();

    match (texture, background_image) {
        (Some(Texture::Image(image)), _) => {
            let value = if image.contains("url(") {
                image.clone()
            } else {
                format!("url({image})")
            };
            style.insert("background-image".into(), value);
        }
        (_, Some(image)) => {
            style.insert("background".into(), format!("{image} no-repeat center center"));
            style.insert("background-size".into(), "cover".into());
        }
        _ => {}
    }

    if let Some(overrides) = overrides {
        for (property, value) in overrides {
            style.insert(css_property_name(property), value.clone());
        }
    }

    let overlay = match texture {
        Some(Texture::Node(node)) => Some(Element::new("div").class(BOX_TEXTURE_CLASS).child(node.clone())),
        _ => None,
    };

    BoxStyle { style, overlay }
}

/// Read a passthrough `style` value (an object of properties) as a [`Style`].
/// Non-object values are ignored.
pub fn style_from_attr(value: &AttrValue) -> Option<Style> {
    let object = value.as_object()?;
    let style = object
        .iter()
        .filter_map(|(property, value)| {
            let value = match value {
                AttrValue::String(s) => s.clone(),
                AttrValue::Number(n) => n.to_string(),
                _ => return None,
            };
            Some((css_property_name(property), value))
        })
        .collect();
    Some(style)
}

/// `backgroundColor` -> `background-color`; already-dashed names are unchanged
fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
