//! Host - Environment Collaborators
//!
//! Everything a component needs from the surrounding document: focus
//! tracking, the keyboard listener registry, an announcement channel and
//! the active locale.

mod announcer;
mod document;
mod keyboard;

pub use announcer::*;
pub use document::*;
pub use keyboard::*;

use std::fmt;
use std::rc::Rc;

use crate::i18n::Locale;

/// Shared environment handed to every component instance
#[derive(Clone)]
pub struct Host {
    pub document: Rc<Document>,
    pub keyboard: Rc<KeyboardAccelerators>,
    pub announcer: Rc<dyn Announcer>,
    pub locale: Locale,
}

impl Host {
    /// Create a host with a fresh document and keyboard registry
    pub fn new(announcer: impl Announcer + 'static) -> Self {
        Self {
            document: Rc::new(Document::new()),
            keyboard: Rc::new(KeyboardAccelerators::new()),
            announcer: Rc::new(announcer),
            locale: Locale::default(),
        }
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(LogAnnouncer)
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("document", &self.document)
            .field("keyboard", &self.keyboard)
            .field("locale", &self.locale)
            .finish()
    }
}
