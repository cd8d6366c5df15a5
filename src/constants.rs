//! Class Constants
//!
//! Class roots and size vocabularies shared by the layout components.

/// Root class of the layout box
pub const BOX_CLASS_ROOT: &str = "box";

/// Root class of the outer element in app-centered mode
pub const BOX_CONTAINER_CLASS_ROOT: &str = "box__container";

/// Class of the wrapper around a node-typed texture
pub const BOX_TEXTURE_CLASS: &str = "box__texture";

/// Prefix of palette background classes
pub const BACKGROUND_COLOR_INDEX: &str = "background-color-index";

/// Class of the skip-navigation anchor
pub const SKIP_LINK_ANCHOR_CLASS: &str = "skip-link-anchor";

/// Prefix of skip-navigation anchor ids
pub const SKIP_LINK_ID_PREFIX: &str = "skip-link-";

/// Element tag used when a box does not name one
pub const DEFAULT_TAG: &str = "div";

/// Role given to a focusable clickable box without an explicit role
pub const DEFAULT_CLICKABLE_ROLE: &str = "link";

/// Fixed size tokens
pub const FIXED_SIZES: [&str; 6] = ["xsmall", "small", "medium", "large", "xlarge", "xxlarge"];

/// Relative size tokens
pub const RELATIVE_SIZES: [&str; 6] = ["full", "1/2", "1/3", "2/3", "1/4", "3/4"];

/// Message keys used by the layout box
pub const MSG_BOX: &str = "a11y.box";
pub const MSG_MAIN_CONTENT: &str = "a11y.main_content";
