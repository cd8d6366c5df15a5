//! Document focus tracking

use std::cell::Cell;

use tracing::trace;

use crate::dom::ElementHandle;

/// The surrounding document, as far as components need it: which element
/// currently holds input focus.
#[derive(Debug, Default)]
pub struct Document {
    active: Cell<Option<ElementHandle>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to `handle`
    pub fn focus(&self, handle: ElementHandle) {
        trace!(%handle, "Focus element");
        self.active.set(Some(handle));
    }

    /// Clear focus
    pub fn blur(&self) {
        self.active.set(None);
    }

    /// The focused element, if any
    pub fn active_element(&self) -> Option<ElementHandle> {
        self.active.get()
    }

    /// Whether `handle` is the focused element
    pub fn has_focus(&self, handle: ElementHandle) -> bool {
        self.active.get() == Some(handle)
    }
}
