//! Helper Utilities
//!
//! Common utilities used across the crate.

mod fs;
mod props;

pub use fs::*;
pub use props::*;
