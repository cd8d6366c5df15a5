//! Keyboard Accelerators
//!
//! Registry of key bindings owned by mounted components. Each owner keeps
//! at most one binding set; registering again replaces it and removing an
//! owner that never registered is a no-op.

use std::cell::RefCell;
use std::fmt;

use ahash::AHashMap;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::dom::{Callback, ElementHandle};

/// Symbolic key names understood by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Parse a symbolic key name ("enter", "space", ...)
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "enter" => Key::Enter,
            "space" => Key::Space,
            "escape" | "esc" => Key::Escape,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            _ => return None,
        };
        Some(key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::Enter => "enter",
            Key::Space => "space",
            Key::Escape => "escape",
            Key::Tab => "tab",
            Key::Backspace => "backspace",
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key bindings of one owner
pub type Bindings = AHashMap<Key, Callback>;

/// Global keyboard listener registry, keyed by owner handle
#[derive(Default)]
pub struct KeyboardAccelerators {
    listeners: RefCell<IndexMap<ElementHandle, Bindings>>,
}

impl KeyboardAccelerators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `bindings` for `owner`, replacing any previous set
    pub fn start_listening(&self, owner: ElementHandle, bindings: Bindings) {
        debug!(%owner, keys = bindings.len(), "Start listening to keyboard");
        self.listeners.borrow_mut().insert(owner, bindings);
    }

    /// Remove every binding of `owner`. Safe to call when nothing is installed.
    pub fn stop_listening(&self, owner: ElementHandle) {
        if self.listeners.borrow_mut().shift_remove(&owner).is_some() {
            debug!(%owner, "Stop listening to keyboard");
        } else {
            trace!(%owner, "Stop listening ignored, owner not registered");
        }
    }

    /// Deliver a key press to every owner bound to `key`.
    ///
    /// Callbacks run after the registry borrow is released, so a callback
    /// may itself register or unregister listeners. Returns how many
    /// callbacks were invoked.
    pub fn dispatch(&self, key: Key) -> usize {
        let callbacks: Vec<Callback> = self
            .listeners
            .borrow()
            .values()
            .filter_map(|bindings| bindings.get(&key).cloned())
            .collect();

        trace!(%key, listeners = callbacks.len(), "Dispatch key press");
        for callback in &callbacks {
            callback.call();
        }
        callbacks.len()
    }

    /// Deliver a key press given by its symbolic name. Unknown names are ignored.
    pub fn dispatch_named(&self, name: &str) -> usize {
        Key::parse(name).map_or(0, |key| self.dispatch(key))
    }

    /// Whether `owner` has bindings installed
    pub fn is_listening(&self, owner: ElementHandle) -> bool {
        self.listeners.borrow().contains_key(&owner)
    }

    /// Number of keys bound for `owner`
    pub fn binding_count(&self, owner: ElementHandle) -> usize {
        self.listeners.borrow().get(&owner).map_or(0, |b| b.len())
    }

    /// Number of owners with bindings installed
    pub fn owner_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for KeyboardAccelerators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardAccelerators")
            .field("owners", &self.owner_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(hits: &Rc<Cell<u32>>) -> Callback {
        let hits = hits.clone();
        Callback::new(move || hits.set(hits.get() + 1))
    }

    #[test]
    fn parse_key_names() {
        assert_eq!(Key::parse("enter"), Some(Key::Enter));
        assert_eq!(Key::parse("Space"), Some(Key::Space));
        assert_eq!(Key::parse("esc"), Some(Key::Escape));
        assert_eq!(Key::parse("f13"), None);
        assert_eq!(Key::Enter.to_string(), "enter");
    }

    #[test]
    fn dispatch_reaches_bound_owners_only() {
        let registry = KeyboardAccelerators::new();
        let hits = Rc::new(Cell::new(0));

        let mut bindings = Bindings::new();
        bindings.insert(Key::Enter, counting(&hits));
        registry.start_listening(ElementHandle::new(), bindings);

        assert_eq!(registry.dispatch(Key::Enter), 1);
        assert_eq!(registry.dispatch(Key::Space), 0);
        assert_eq!(registry.dispatch_named("unknown"), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn stop_listening_is_idempotent() {
        let registry = KeyboardAccelerators::new();
        let owner = ElementHandle::new();
        let hits = Rc::new(Cell::new(0));

        registry.stop_listening(owner);

        let mut bindings = Bindings::new();
        bindings.insert(Key::Enter, counting(&hits));
        bindings.insert(Key::Space, counting(&hits));
        registry.start_listening(owner, bindings);
        assert_eq!(registry.binding_count(owner), 2);

        registry.stop_listening(owner);
        registry.stop_listening(owner);
        assert!(!registry.is_listening(owner));
        assert_eq!(registry.owner_count(), 0);
        assert_eq!(registry.dispatch(Key::Enter), 0);
    }

    #[test]
    fn owners_do_not_interfere() {
        let registry = KeyboardAccelerators::new();
        let first = ElementHandle::new();
        let second = ElementHandle::new();
        let hits = Rc::new(Cell::new(0));

        for owner in [first, second] {
            let mut bindings = Bindings::new();
            bindings.insert(Key::Space, counting(&hits));
            registry.start_listening(owner, bindings);
        }

        registry.stop_listening(first);
        assert!(registry.is_listening(second));
        assert_eq!(registry.dispatch(Key::Space), 1);
    }
}
