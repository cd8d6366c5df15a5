//! LayoutBox instance and its attach/update/detach contract
//!
//! ```text
//! on_attach ──(on_click set)──▶ Listening ──on_detach──▶ Idle
//!     └──────(no on_click)────▶ Idle
//! ```
//!
//! The keyboard binding is decided once, at attach. Later changes to the
//! activation callback are not picked up until the box is detached and
//! attached again.

use tracing::{debug, trace, warn};

use crate::dom::{Callback, Element, ElementHandle};
use crate::host::{Bindings, Host, Key};

use super::config::LayoutConfig;
use super::render::render_box;

/// Keyboard activation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activation {
    /// No key bindings installed
    #[default]
    Idle,
    /// Enter/Space bound to the activation callback
    Listening,
}

/// A mounted layout box
#[derive(Debug)]
pub struct LayoutBox {
    host: Host,
    handle: ElementHandle,
    attached: bool,
    activation: Activation,
}

impl LayoutBox {
    /// Create an instance bound to `host`. The root handle is fixed for the
    /// lifetime of the instance.
    pub fn new(host: Host) -> Self {
        Self {
            host,
            handle: ElementHandle::new(),
            attached: false,
            activation: Activation::Idle,
        }
    }

    /// Handle of the root element
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Render `config` with this instance's root handle and the host locale
    pub fn render(&self, config: &LayoutConfig) -> Element {
        render_box(config, self.host.locale, Some(self.handle))
    }

    /// The box entered the rendered tree
    pub fn on_attach(&mut self, config: &LayoutConfig) {
        if self.attached {
            warn!(handle = %self.handle, "LayoutBox attached twice, ignoring");
            return;
        }
        self.attached = true;
        debug!(handle = %self.handle, "LayoutBox attached");

        let Some(on_click) = config.on_click.clone() else {
            return;
        };

        let document = self.host.document.clone();
        let handle = self.handle;
        let activate = Callback::new(move || {
            // The registry is global; only react while this box holds focus
            if document.has_focus(handle) {
                on_click.call();
            }
        });

        let mut bindings = Bindings::new();
        bindings.insert(Key::Enter, activate.clone());
        bindings.insert(Key::Space, activate);
        self.host.keyboard.start_listening(handle, bindings);
        self.activation = Activation::Listening;
    }

    /// The box re-rendered with `next`
    pub fn on_update(&mut self, prev: &LayoutConfig, next: &LayoutConfig) {
        if prev.on_click.is_some() != next.on_click.is_some() {
            debug!(
                handle = %self.handle,
                activation = ?self.activation,
                "Activation callback changed after attach; keyboard binding unchanged"
            );
        }

        if next.announce {
            let text = self.render(next).text_content();
            trace!(handle = %self.handle, len = text.len(), "Announce box content");
            self.host.announcer.announce(&text);
        }
    }

    /// The box left the rendered tree. Always removes this instance's
    /// listeners, whatever the current configuration says.
    pub fn on_detach(&mut self) {
        self.host.keyboard.stop_listening(self.handle);
        self.activation = Activation::Idle;
        self.attached = false;
        debug!(handle = %self.handle, "LayoutBox detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Announcer, ChannelAnnouncer};
    use crate::i18n::Locale;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingAnnouncer {
        texts: RefCell<Vec<String>>,
    }

    impl Announcer for Rc<RecordingAnnouncer> {
        fn announce(&self, text: &str) {
            self.texts.borrow_mut().push(text.to_string());
        }
    }

    fn clicks() -> (Rc<Cell<u32>>, LayoutConfig) {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let config = LayoutConfig::new().on_click(move || counter.set(counter.get() + 1));
        (hits, config)
    }

    #[test]
    fn attach_with_callback_starts_listening() {
        let host = Host::default();
        let (_, config) = clicks();
        let mut layout_box = LayoutBox::new(host.clone());

        assert!(!layout_box.is_attached());
        layout_box.on_attach(&config);

        assert!(layout_box.is_attached());
        assert_eq!(layout_box.activation(), Activation::Listening);
        assert_eq!(host.keyboard.binding_count(layout_box.handle()), 2);
    }

    #[test]
    fn renders_with_host_locale() {
        let host = Host::default().with_locale(Locale::ZhCN);
        let layout_box = LayoutBox::new(host);
        let (_, config) = clicks();

        assert_eq!(layout_box.host().locale, Locale::ZhCN);
        assert_eq!(layout_box.render(&config).get_attr_str("aria-label"), Some("盒子"));
    }

    #[test]
    fn attach_without_callback_stays_idle() {
        let host = Host::default();
        let mut layout_box = LayoutBox::new(host.clone());

        layout_box.on_attach(&LayoutConfig::new());

        assert_eq!(layout_box.activation(), Activation::Idle);
        assert!(!host.keyboard.is_listening(layout_box.handle()));
    }

    #[test]
    fn keys_activate_only_when_focused() {
        let host = Host::default();
        let (hits, config) = clicks();
        let mut layout_box = LayoutBox::new(host.clone());
        layout_box.on_attach(&config);

        host.keyboard.dispatch(Key::Enter);
        assert_eq!(hits.get(), 0);

        host.document.focus(ElementHandle::new());
        host.keyboard.dispatch(Key::Space);
        assert_eq!(hits.get(), 0);

        host.document.focus(layout_box.handle());
        host.keyboard.dispatch(Key::Enter);
        host.keyboard.dispatch(Key::Space);
        host.keyboard.dispatch(Key::Escape);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn detach_leaves_no_bindings() {
        let host = Host::default();
        let (hits, config) = clicks();
        let mut layout_box = LayoutBox::new(host.clone());

        layout_box.on_attach(&config);
        layout_box.on_detach();

        assert_eq!(layout_box.activation(), Activation::Idle);
        assert!(!layout_box.is_attached());
        assert_eq!(host.keyboard.binding_count(layout_box.handle()), 0);
        assert_eq!(host.keyboard.owner_count(), 0);

        host.document.focus(layout_box.handle());
        assert_eq!(host.keyboard.dispatch(Key::Enter), 0);
        assert_eq!(hits.get(), 0);

        // Detaching again is a no-op
        layout_box.on_detach();
        assert_eq!(host.keyboard.owner_count(), 0);
    }

    #[test]
    fn instances_are_isolated() {
        let host = Host::default();
        let (first_hits, first_config) = clicks();
        let (second_hits, second_config) = clicks();
        let mut first = LayoutBox::new(host.clone());
        let mut second = LayoutBox::new(host.clone());
        first.on_attach(&first_config);
        second.on_attach(&second_config);

        host.document.focus(second.handle());
        host.keyboard.dispatch(Key::Enter);
        assert_eq!((first_hits.get(), second_hits.get()), (0, 1));

        first.on_detach();
        assert!(host.keyboard.is_listening(second.handle()));
    }

    #[test]
    fn binding_is_fixed_at_attach() {
        let host = Host::default();
        let (hits, config) = clicks();
        let mut layout_box = LayoutBox::new(host.clone());
        layout_box.on_attach(&LayoutConfig::new());

        layout_box.on_update(&LayoutConfig::new(), &config);
        host.document.focus(layout_box.handle());
        host.keyboard.dispatch(Key::Enter);

        assert_eq!(layout_box.activation(), Activation::Idle);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn pointer_activation_independent_of_keyboard() {
        let host = Host::default();
        let (hits, config) = clicks();
        let layout_box = LayoutBox::new(host.clone());

        let rendered = layout_box.render(&config.clone().focusable(false));
        assert!(rendered.click());
        let rendered = layout_box.render(&config);
        assert!(rendered.click());
        assert_eq!(hits.get(), 2);
        assert_eq!(rendered.handle, Some(layout_box.handle()));
    }

    #[test]
    fn announces_post_update_text_every_update() {
        let recorder = Rc::new(RecordingAnnouncer::default());
        let host = Host::new(recorder.clone());
        let mut layout_box = LayoutBox::new(host);

        let first = LayoutConfig::new().announce(true).child("Loading");
        let second = LayoutConfig::new()
            .announce(true)
            .child("Loaded ")
            .child(Element::new("strong").child("3 items"));

        layout_box.on_attach(&first);
        assert!(recorder.texts.borrow().is_empty());

        layout_box.on_update(&first, &second);
        layout_box.on_update(&second, &second);

        assert_eq!(
            *recorder.texts.borrow(),
            vec!["Loaded 3 items".to_string(), "Loaded 3 items".to_string()]
        );
    }

    #[test]
    fn no_announcement_when_disabled() {
        let (announcer, rx) = ChannelAnnouncer::new();
        let mut layout_box = LayoutBox::new(Host::new(announcer));
        let config = LayoutConfig::new().child("quiet");

        layout_box.on_attach(&config);
        layout_box.on_update(&config, &config);

        assert!(rx.try_recv().is_err());
    }
}
