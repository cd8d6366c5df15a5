//! LayoutBox Component
//!
//! Generic flex container. Derives structural classes from a declarative
//! [`LayoutConfig`], wires Enter/Space activation while focused, and can
//! announce its text content after every update.

mod classes;
mod config;
mod lifecycle;
mod render;
mod style;

pub use classes::*;
pub use config::*;
pub use lifecycle::*;
pub use render::*;
pub use style::*;
