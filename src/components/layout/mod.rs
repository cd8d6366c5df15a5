//! Layout Components
//!
//! Container primitives that arrange their children.

pub mod layout_box;

pub use layout_box::{LayoutBox, LayoutConfig};
