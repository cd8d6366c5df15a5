//! layout-kit Library
//!
//! Declarative layout components rendered into a host-neutral element tree.
//! The centrepiece is [`LayoutBox`](components::layout::LayoutBox): a flex
//! container whose structural classes, keyboard activation and screen-reader
//! announcements are all derived from a [`LayoutConfig`](components::layout::LayoutConfig).

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod constants;
pub mod dom;
pub mod error;
pub mod helpers;
pub mod host;
pub mod i18n;
pub mod settings;
