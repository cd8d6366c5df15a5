//! Class-list derivation
//!
//! Maps a [`LayoutConfig`] to the ordered class lists of the rendered
//! element(s). Order is part of the contract: the style sheet lets later
//! classes override earlier ones, so entries are never reordered.

use crate::constants::{BACKGROUND_COLOR_INDEX, BOX_CLASS_ROOT, BOX_CONTAINER_CLASS_ROOT};

use super::config::{Dimension, Flex, Full, LayoutConfig, SizeSpec, SpacingSpec};

/// Derived class lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxClasses {
    /// Classes of the box element (the inner element in app-centered mode)
    pub root: Vec<String>,
    /// Classes of the outer element, present only in app-centered mode
    pub container: Option<Vec<String>>,
}

impl BoxClasses {
    /// Class list of the element that shows the background color
    pub fn surface(&self) -> &[String] {
        self.container.as_deref().unwrap_or(&self.root)
    }
}

fn normalize(token: &str) -> String {
    token.replacen('/', "-", 1)
}

/// Accumulates `<root>--<prefix>[-<value>]` classes
struct ClassList {
    root: &'static str,
    classes: Vec<String>,
}

impl ClassList {
    fn new(root: &'static str) -> Self {
        Self {
            root,
            classes: vec![root.to_string()],
        }
    }

    fn value(&mut self, prefix: &str, token: &str) {
        self.classes
            .push(format!("{}--{}-{}", self.root, prefix, normalize(token)));
    }

    fn flag(&mut self, prefix: &str) {
        self.classes.push(format!("{}--{}", self.root, normalize(prefix)));
    }

    fn toggle(&mut self, prefix: &str, on: Option<bool>) {
        if on == Some(true) {
            self.flag(prefix);
        }
    }

    fn push(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    fn full(&mut self, full: Option<Full>) {
        match full {
            Some(Full::Axis(axis)) => self.value("full", axis.token()),
            Some(Full::Toggle(true)) => self.flag("full"),
            Some(Full::Toggle(false)) | None => {}
        }
    }

    fn spacing(&mut self, prefix: &str, spec: Option<SpacingSpec>) {
        match spec {
            Some(SpacingSpec::Uniform(spacing)) => self.value(prefix, spacing.token()),
            Some(SpacingSpec::Edges(edges)) => {
                for (edge, spacing) in edges.entries() {
                    self.value(&format!("{prefix}-{edge}"), spacing.token());
                }
            }
            None => {}
        }
    }

    fn dimension(&mut self, prefix: &str, dimension: Option<Dimension>) {
        match dimension {
            Some(Dimension::Named(size)) => self.value(prefix, size.token()),
            Some(Dimension::Range(range)) => {
                if let Some(min) = range.min {
                    self.value(&format!("{prefix}-min"), min.token());
                }
                if let Some(max) = range.max {
                    self.value(&format!("{prefix}-max"), max.token());
                }
            }
            None => {}
        }
    }

    fn finish(self) -> Vec<String> {
        self.classes
    }
}

/// Derive the class lists for `config`. Pure: equal input, equal output.
pub fn derive_classes(config: &LayoutConfig) -> BoxClasses {
    let mut classes = ClassList::new(BOX_CLASS_ROOT);

    classes.full(config.full);
    if let Some(direction) = config.direction {
        classes.value("direction", direction.token());
    }
    if let Some(justify) = config.justify {
        classes.value("justify", justify.token());
    }
    if let Some(align) = config.align {
        classes.value("align", align.token());
    }
    if let Some(align_content) = config.align_content {
        classes.value("align-content", align_content.token());
    }
    if let Some(align_self) = config.align_self {
        classes.value("align-self", align_self.token());
    }
    classes.toggle("reverse", config.reverse);
    classes.toggle("responsive", config.responsive);
    if let Some(basis) = config.basis {
        classes.value("basis", basis.token());
    }
    match config.flex {
        Some(Flex::Mode(mode)) => classes.value("flex", mode.token()),
        Some(Flex::Toggle(true)) => classes.flag("flex"),
        Some(Flex::Toggle(false)) | None => {}
    }
    classes.spacing("pad", config.pad);
    classes.spacing("margin", config.margin);
    if let Some(separator) = config.separator {
        classes.value("separator", separator.token());
    }
    if let Some(text_align) = config.text_align {
        classes.value("text-align", text_align.token());
    }
    classes.toggle("wrap", config.wrap);

    // Explicitly disabled, as opposed to unspecified
    if config.flex == Some(Flex::Toggle(false)) {
        classes.flag("flex-off");
    }

    if let Some(size) = config.size {
        match size {
            SizeSpec::Named(named) => classes.value("size", named.token()),
            SizeSpec::Dimensions(dimensions) => {
                classes.dimension("size-width", dimensions.width);
                classes.dimension("size-height", dimensions.height);
            }
        }
        // The generic class caps max-width at 100%, which an explicit width max replaces
        if !size.has_width_max() {
            classes.flag("size");
        }
    }

    // Three-across grids need an adjusted flex-basis
    let children = config.child_count();
    if config.pad.and_then(|pad| pad.between()).is_some() && children > 0 && children % 3 == 0 {
        classes.flag("pad-between-thirds");
    }

    let background = config
        .color_index
        .as_ref()
        .map(|index| format!("{BACKGROUND_COLOR_INDEX}-{index}"));

    let container = if config.app_centered {
        let mut container = ClassList::new(BOX_CONTAINER_CLASS_ROOT);
        container.full(config.full);
        if let Some(background) = background {
            container.push(background);
        }
        if let Some(class_name) = &config.container_class_name {
            container.push(class_name.clone());
        }
        Some(container.finish())
    } else {
        if let Some(background) = background {
            classes.push(background);
        }
        None
    };

    if config.on_click.is_some() {
        classes.flag("clickable");
    }

    if let Some(class_name) = &config.class_name {
        classes.push(class_name.clone());
    }

    BoxClasses {
        root: classes.finish(),
        container,
    }
}
