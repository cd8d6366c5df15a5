//! DOM - Host-neutral Element Tree
//!
//! Components render into this tree. A host walks it to build real widgets,
//! or serializes it to HTML via [`to_html`].

mod element;
mod html;

pub use element::*;
pub use html::*;
