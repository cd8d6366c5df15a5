//! Primitive Components
//!
//! Basic building blocks shared by the layout components.

mod skip_link;

pub use skip_link::*;
