//! LayoutBox configuration
//!
//! Each field that accepts more than one shape is a sum type, so class
//! derivation matches on variants instead of inspecting values.

use std::path::Path;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TAG;
use crate::dom::{
    AttrValue, Callback, Element, Node, check_names, is_valid_attr_name, is_valid_tag_name,
};
use crate::error::{Error, Result};
use crate::helpers::omit;

/// Declares a closed vocabulary of class tokens.
macro_rules! tokens {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Token as written in configuration
            pub fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }
    };
}

tokens! {
    /// Main axis
    Direction { Row => "row", Column => "column" }
}

tokens! {
    /// Main-axis distribution
    Justify { Start => "start", Center => "center", Between => "between", End => "end" }
}

tokens! {
    /// Cross-axis alignment of children
    Align {
        Start => "start",
        Center => "center",
        End => "end",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

tokens! {
    /// Cross-axis alignment of the box within its parent
    AlignSelf { Start => "start", Center => "center", End => "end", Stretch => "stretch" }
}

tokens! {
    /// Distribution of wrapped lines
    AlignContent {
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Around => "around",
        Stretch => "stretch",
    }
}

tokens! {
    /// Scalar `size` values: `auto` or a named size
    Size {
        Auto => "auto",
        XSmall => "xsmall",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "xlarge",
        XXLarge => "xxlarge",
        Full => "full",
        Half => "1/2",
        Third => "1/3",
        TwoThirds => "2/3",
        Quarter => "1/4",
        ThreeQuarters => "3/4",
    }
}

tokens! {
    /// Named sizes, fixed and relative, for `basis` and structured width/height
    Extent {
        XSmall => "xsmall",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "xlarge",
        XXLarge => "xxlarge",
        Full => "full",
        Half => "1/2",
        Third => "1/3",
        TwoThirds => "2/3",
        Quarter => "1/4",
        ThreeQuarters => "3/4",
    }
}

tokens! {
    /// Fixed sizes, usable as min/max bounds
    FixedSize {
        XSmall => "xsmall",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "xlarge",
        XXLarge => "xxlarge",
    }
}

tokens! {
    /// Pad and margin levels
    Spacing { Small => "small", Medium => "medium", Large => "large", None => "none" }
}

tokens! {
    /// Border separator placement
    Separator {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Horizontal => "horizontal",
        Vertical => "vertical",
        All => "all",
        None => "none",
    }
}

tokens! {
    /// Text alignment
    TextAlign { Left => "left", Center => "center", Right => "right" }
}

tokens! {
    /// Flex growth mode
    FlexMode { Grow => "grow", Shrink => "shrink" }
}

tokens! {
    /// Axis of the legacy `full` field
    FullAxis { Horizontal => "horizontal", Vertical => "vertical" }
}

/// `flex`: grow, shrink, or plain on/off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Flex {
    Mode(FlexMode),
    Toggle(bool),
}

impl From<FlexMode> for Flex {
    fn from(mode: FlexMode) -> Self {
        Flex::Mode(mode)
    }
}

impl From<bool> for Flex {
    fn from(on: bool) -> Self {
        Flex::Toggle(on)
    }
}

/// Legacy `full`: both axes, one axis, or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Full {
    Axis(FullAxis),
    Toggle(bool),
}

impl From<FullAxis> for Full {
    fn from(axis: FullAxis) -> Self {
        Full::Axis(axis)
    }
}

impl From<bool> for Full {
    fn from(on: bool) -> Self {
        Full::Toggle(on)
    }
}

/// Per-edge spacing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpacing {
    pub top: Option<Spacing>,
    pub bottom: Option<Spacing>,
    pub left: Option<Spacing>,
    pub right: Option<Spacing>,
    pub horizontal: Option<Spacing>,
    pub vertical: Option<Spacing>,
    pub between: Option<Spacing>,
}

impl EdgeSpacing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, spacing: Spacing) -> Self {
        self.top = Some(spacing);
        self
    }

    pub fn bottom(mut self, spacing: Spacing) -> Self {
        self.bottom = Some(spacing);
        self
    }

    pub fn left(mut self, spacing: Spacing) -> Self {
        self.left = Some(spacing);
        self
    }

    pub fn right(mut self, spacing: Spacing) -> Self {
        self.right = Some(spacing);
        self
    }

    pub fn horizontal(mut self, spacing: Spacing) -> Self {
        self.horizontal = Some(spacing);
        self
    }

    pub fn vertical(mut self, spacing: Spacing) -> Self {
        self.vertical = Some(spacing);
        self
    }

    pub fn between(mut self, spacing: Spacing) -> Self {
        self.between = Some(spacing);
        self
    }

    /// Populated edges, in emission order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Spacing)> {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
            ("between", self.between),
        ]
        .into_iter()
        .filter_map(|(edge, spacing)| spacing.map(|s| (edge, s)))
    }
}

/// `pad` / `margin`: one level for every edge, or per edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SpacingSpec {
    Uniform(Spacing),
    Edges(EdgeSpacing),
}

impl SpacingSpec {
    /// Spacing between children, when given per edge
    pub fn between(&self) -> Option<Spacing> {
        match self {
            SpacingSpec::Edges(edges) => edges.between,
            SpacingSpec::Uniform(_) => None,
        }
    }
}

impl From<Spacing> for SpacingSpec {
    fn from(spacing: Spacing) -> Self {
        SpacingSpec::Uniform(spacing)
    }
}

impl From<EdgeSpacing> for SpacingSpec {
    fn from(edges: EdgeSpacing) -> Self {
        SpacingSpec::Edges(edges)
    }
}

/// Min/max bounds of one dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SizeRange {
    pub min: Option<FixedSize>,
    pub max: Option<FixedSize>,
}

impl SizeRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, size: FixedSize) -> Self {
        self.min = Some(size);
        self
    }

    pub fn max(mut self, size: FixedSize) -> Self {
        self.max = Some(size);
        self
    }
}

/// One dimension of a structured size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Dimension {
    Named(Extent),
    Range(SizeRange),
}

impl From<Extent> for Dimension {
    fn from(size: Extent) -> Self {
        Dimension::Named(size)
    }
}

impl From<SizeRange> for Dimension {
    fn from(range: SizeRange) -> Self {
        Dimension::Range(range)
    }
}

/// Independent width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SizeDimensions {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

impl SizeDimensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }
}

/// `size`: a named size, or width/height specified separately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SizeSpec {
    Named(Size),
    Dimensions(SizeDimensions),
}

impl SizeSpec {
    /// Whether an explicit maximum width is set
    pub fn has_width_max(&self) -> bool {
        matches!(
            self,
            SizeSpec::Dimensions(SizeDimensions {
                width: Some(Dimension::Range(SizeRange { max: Some(_), .. })),
                ..
            })
        )
    }
}

impl From<Size> for SizeSpec {
    fn from(size: Size) -> Self {
        SizeSpec::Named(size)
    }
}

impl From<SizeDimensions> for SizeSpec {
    fn from(dimensions: SizeDimensions) -> Self {
        SizeSpec::Dimensions(dimensions)
    }
}

/// Background texture: an image reference or a node drawn as an overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Texture {
    Image(String),
    Node(Node),
}

impl From<&str> for Texture {
    fn from(image: &str) -> Self {
        Texture::Image(image.to_string())
    }
}

impl From<String> for Texture {
    fn from(image: String) -> Self {
        Texture::Image(image)
    }
}

impl From<Node> for Texture {
    fn from(node: Node) -> Self {
        Texture::Node(node)
    }
}

impl From<Element> for Texture {
    fn from(element: Element) -> Self {
        Texture::Node(Node::Element(element))
    }
}

/// Configuration keys consumed by the box itself; everything else is
/// forwarded to the rendered element.
pub const KNOWN_KEYS: &[&str] = &[
    "a11yTitle",
    "align",
    "alignContent",
    "alignSelf",
    "announce",
    "appCentered",
    "backgroundImage",
    "basis",
    "children",
    "className",
    "colorIndex",
    "containerClassName",
    "direction",
    "flex",
    "focusable",
    "full",
    "id",
    "justify",
    "margin",
    "onClick",
    "pad",
    "primary",
    "responsive",
    "reverse",
    "role",
    "separator",
    "size",
    "tabIndex",
    "tag",
    "textAlign",
    "texture",
    "wrap",
];

/// Declarative input of a LayoutBox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub a11y_title: Option<String>,
    pub align: Option<Align>,
    pub align_content: Option<AlignContent>,
    pub align_self: Option<AlignSelf>,
    pub announce: bool,
    pub app_centered: bool,
    pub background_image: Option<String>,
    pub basis: Option<Extent>,
    pub children: Vec<Node>,
    pub class_name: Option<String>,
    pub color_index: Option<String>,
    pub container_class_name: Option<String>,
    pub direction: Option<Direction>,
    pub flex: Option<Flex>,
    pub focusable: bool,
    /// Deprecated; kept alongside `size`/`basis` without reconciliation
    pub full: Option<Full>,
    pub id: Option<String>,
    pub justify: Option<Justify>,
    pub margin: Option<SpacingSpec>,
    #[serde(skip)]
    pub on_click: Option<Callback>,
    pub pad: Option<SpacingSpec>,
    pub primary: bool,
    pub responsive: Option<bool>,
    pub reverse: Option<bool>,
    pub role: Option<String>,
    pub separator: Option<Separator>,
    pub size: Option<SizeSpec>,
    pub tab_index: Option<i32>,
    pub tag: String,
    pub text_align: Option<TextAlign>,
    pub texture: Option<Texture>,
    pub wrap: Option<bool>,
    /// Unrecognized entries, forwarded as native attributes
    #[serde(flatten)]
    pub extra: IndexMap<String, AttrValue>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            a11y_title: None,
            align: None,
            align_content: None,
            align_self: None,
            announce: false,
            app_centered: false,
            background_image: None,
            basis: None,
            children: Vec::new(),
            class_name: None,
            color_index: None,
            container_class_name: None,
            direction: Some(Direction::Column),
            flex: None,
            focusable: true,
            full: None,
            id: None,
            justify: None,
            margin: None,
            on_click: None,
            pad: Some(SpacingSpec::Uniform(Spacing::None)),
            primary: false,
            responsive: Some(true),
            reverse: None,
            role: None,
            separator: None,
            size: None,
            tab_index: None,
            tag: DEFAULT_TAG.to_string(),
            text_align: None,
            texture: None,
            wrap: None,
            extra: IndexMap::new(),
        }
    }
}

impl LayoutConfig {
    /// Configuration with the component defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let parse = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::UnsupportedConfigFile {
                    path: path.to_path_buf(),
                });
            }
        };
        parse(&std::fs::read_to_string(path)?)
    }

    /// Check that every tag and attribute name can be written as HTML
    pub fn validate(&self) -> Result<()> {
        if !is_valid_tag_name(&self.tag) {
            return Err(Error::InvalidTagName {
                name: self.tag.clone(),
            });
        }
        if let Some(name) = self.extra.keys().find(|name| !is_valid_attr_name(name)) {
            return Err(Error::InvalidAttributeName { name: name.clone() });
        }

        let texture = match &self.texture {
            Some(Texture::Node(node)) => Some(node),
            _ => None,
        };
        self.children
            .iter()
            .chain(texture)
            .filter_map(Node::as_element)
            .try_for_each(check_names)
    }

    /// Entries forwarded to the rendered element
    pub fn passthrough(&self) -> IndexMap<String, AttrValue> {
        omit(&self.extra, KNOWN_KEYS)
    }

    /// Number of child nodes
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    // ==================== Builder ====================

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = Some(align_content);
        self
    }

    pub fn align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = Some(align_self);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn basis(mut self, basis: Extent) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn flex(mut self, flex: impl Into<Flex>) -> Self {
        self.flex = Some(flex.into());
        self
    }

    pub fn pad(mut self, pad: impl Into<SpacingSpec>) -> Self {
        self.pad = Some(pad.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<SpacingSpec>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn size(mut self, size: impl Into<SizeSpec>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = Some(text_align);
        self
    }

    pub fn full(mut self, full: impl Into<Full>) -> Self {
        self.full = Some(full.into());
        self
    }

    pub fn color_index(mut self, color_index: impl Into<String>) -> Self {
        self.color_index = Some(color_index.into());
        self
    }

    pub fn app_centered(mut self, app_centered: bool) -> Self {
        self.app_centered = app_centered;
        self
    }

    pub fn background_image(mut self, image: impl Into<String>) -> Self {
        self.background_image = Some(image.into());
        self
    }

    pub fn texture(mut self, texture: impl Into<Texture>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Set the activation handler
    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Callback::new(handler));
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn a11y_title(mut self, title: impl Into<String>) -> Self {
        self.a11y_title = Some(title.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn container_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.container_class_name = Some(class_name.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes
    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set a passthrough attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// JSON Schema of [`LayoutConfig`], for validating configuration files
pub fn layout_config_schema() -> schemars::Schema {
    schemars::schema_for!(LayoutConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.direction, Some(Direction::Column));
        assert_eq!(config.pad, Some(SpacingSpec::Uniform(Spacing::None)));
        assert_eq!(config.responsive, Some(true));
        assert!(config.focusable);
        assert!(!config.announce);
        assert_eq!(config.tag, "div");
    }

    #[test]
    fn parses_scalar_and_structured_fields() {
        let config = LayoutConfig::from_toml_str(
            r#"
            direction = "row"
            basis = "1/3"
            flex = false
            full = "horizontal"
            margin = { top = "small", left = "none" }
            size = { width = { max = "large" }, height = "medium" }
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.direction, Some(Direction::Row));
        assert_eq!(config.basis, Some(Extent::Third));
        assert_eq!(config.flex, Some(Flex::Toggle(false)));
        assert_eq!(config.full, Some(Full::Axis(FullAxis::Horizontal)));
        assert_eq!(
            config.margin,
            Some(SpacingSpec::Edges(
                EdgeSpacing::new().top(Spacing::Small).left(Spacing::None)
            ))
        );
        assert_eq!(
            config.size,
            Some(SizeSpec::Dimensions(
                SizeDimensions::new()
                    .width(SizeRange::new().max(FixedSize::Large))
                    .height(Extent::Medium)
            ))
        );
        // Unset fields keep their defaults
        assert_eq!(config.pad, Some(SpacingSpec::Uniform(Spacing::None)));
    }

    #[test]
    fn unknown_keys_become_passthrough() {
        let config = LayoutConfig::from_json_str(
            r#"{"direction": "row", "data-testid": "hero", "aria-live": "polite", "tabIndex": 2}"#,
        )
        .expect("config should parse");

        let passthrough = config.passthrough();
        let keys: Vec<_> = passthrough.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["data-testid", "aria-live"]);
        assert_eq!(config.tab_index, Some(2));
    }

    #[test]
    fn passthrough_filters_known_keys_set_by_hand() {
        let config = LayoutConfig::new().attr("id", "shadowed").attr("title", "kept");
        let keys: Vec<_> = config.passthrough().keys().cloned().collect();
        assert_eq!(keys, vec!["title".to_string()]);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(LayoutConfig::from_toml_str(r#"direction = "diagonal""#).is_err());
        assert!(LayoutConfig::from_toml_str(r#"pad = { diagonal = "small" }"#).is_err());
        assert!(LayoutConfig::from_toml_str(r#"size = { width = { max = "1/2" } }"#).is_err());
        assert!(LayoutConfig::from_toml_str(r#"basis = "auto""#).is_err());
        assert!(LayoutConfig::from_toml_str(r#"size = { width = "auto" }"#).is_err());
        assert!(LayoutConfig::from_toml_str(r#"size = { height = "auto" }"#).is_err());
    }

    #[test]
    fn auto_is_only_a_scalar_size() {
        let config = LayoutConfig::from_toml_str(r#"size = "auto""#).expect("scalar auto parses");
        assert_eq!(config.size, Some(SizeSpec::Named(Size::Auto)));
        assert!(serde_json::from_value::<Extent>(serde_json::json!("auto")).is_err());
    }

    #[test]
    fn rejects_names_that_are_not_html() {
        let err = LayoutConfig::from_json_str(r#"{"tag": "div onmouseover=alert(1)"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTagName { ref name } if name == "div onmouseover=alert(1)"));

        let err = LayoutConfig::from_json_str(r#"{"x><script>alert(2)</script": "v"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidAttributeName { .. }));

        let err = LayoutConfig::from_json_str(r#"{"children": [{"tag": "p", "attributes": {"a b": 1}}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAttributeName { ref name } if name == "a b"));

        let err = LayoutConfig::from_json_str(r#"{"texture": {"tag": "svg/"}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTagName { .. }));

        assert!(LayoutConfig::from_toml_str("tag = \"my-panel\"\n\"data-id\" = \"7\"").is_ok());
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("layout-kit-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "direction: row").expect("write temp config");

        let err = LayoutConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).expect("remove temp config");
        assert!(matches!(err, Error::UnsupportedConfigFile { path: ref p } if *p == path));
    }

    #[test]
    fn load_reads_toml_by_extension() {
        let path = std::env::temp_dir().join(format!("layout-kit-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "direction = \"row\"").expect("write temp config");

        let config = LayoutConfig::load(&path);
        std::fs::remove_file(&path).expect("remove temp config");
        assert_eq!(config.expect("config loads").direction, Some(Direction::Row));
    }

    #[test]
    fn texture_accepts_string_or_node() {
        let image = LayoutConfig::from_json_str(r#"{"texture": "bg.png"}"#).expect("parse");
        assert_eq!(image.texture, Some(Texture::Image("bg.png".into())));

        let node = LayoutConfig::from_json_str(r#"{"texture": {"tag": "svg"}}"#).expect("parse");
        assert!(matches!(node.texture, Some(Texture::Node(Node::Element(ref e))) if e.tag == "svg"));
    }

    #[test]
    fn size_vocabulary_matches_tokens() {
        use crate::constants::{FIXED_SIZES, RELATIVE_SIZES};

        for token in FIXED_SIZES {
            let fixed: FixedSize = serde_json::from_value(serde_json::json!(token)).expect("fixed size");
            let named: Size = serde_json::from_value(serde_json::json!(token)).expect("named size");
            let extent: Extent = serde_json::from_value(serde_json::json!(token)).expect("extent");
            assert_eq!(fixed.token(), token);
            assert_eq!(named.token(), token);
            assert_eq!(extent.token(), token);
        }
        for token in RELATIVE_SIZES {
            let named: Size = serde_json::from_value(serde_json::json!(token)).expect("relative size");
            let extent: Extent = serde_json::from_value(serde_json::json!(token)).expect("extent");
            assert_eq!(named.token(), token);
            assert_eq!(extent.token(), token);
            assert!(serde_json::from_value::<FixedSize>(serde_json::json!(token)).is_err());
        }
    }

    #[test]
    fn width_max_detection() {
        let with_max = SizeSpec::from(SizeDimensions::new().width(SizeRange::new().max(FixedSize::Small)));
        let with_min = SizeSpec::from(SizeDimensions::new().width(SizeRange::new().min(FixedSize::Small)));
        assert!(with_max.has_width_max());
        assert!(!with_min.has_width_max());
        assert!(!SizeSpec::from(Size::Medium).has_width_max());
    }

    #[test]
    fn schema_lists_config_fields() {
        let schema = serde_json::to_value(layout_config_schema()).expect("schema serializes");
        let properties = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("schema has properties");
        assert!(properties.contains_key("appCentered"));
        assert!(properties.contains_key("a11yTitle"));
        assert!(!properties.contains_key("onClick"));
    }
}
