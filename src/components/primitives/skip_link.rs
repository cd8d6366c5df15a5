//! Skip Link Anchor
//!
//! Invisible anchor that lets assistive technology jump past repeated
//! navigation straight to the content it marks.

use crate::constants::{SKIP_LINK_ANCHOR_CLASS, SKIP_LINK_ID_PREFIX};
use crate::dom::Element;

/// Skip-navigation anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipLinkAnchor {
    label: String,
}

impl SkipLinkAnchor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Anchor id, derived from the label
    pub fn id(&self) -> String {
        let slug = self.label.to_lowercase().replace(' ', "_");
        format!("{SKIP_LINK_ID_PREFIX}{slug}")
    }

    pub fn render(&self) -> Element {
        Element::new("a")
            .class(SKIP_LINK_ANCHOR_CLASS)
            .attr("id", self.id())
            .attr("tabindex", -1)
            .attr("aria-hidden", "true")
            .attr("aria-label", self.label.as_str())
    }
}
