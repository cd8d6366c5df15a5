//! i18n - Internationalization Module
//!
//! Message lookup backed by the `locales/` files compiled in through
//! `rust-i18n`. A missing entry degrades to the lookup's own fallback
//! (the key text) instead of failing.

use std::str::FromStr;

use rust_i18n::t;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh")]
    ZhCN,
}

impl Locale {
    /// Name of the language in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Locale code used by the message files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Resolve a language tag such as `en`, `en-US` or `zh_CN`
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Detect the locale from the operating system, falling back to English
    pub fn system() -> Self {
        let current = locale_config::Locale::current().to_string();
        current
            .split(',')
            .find_map(Self::from_code)
            .unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| Error::UnknownLocale {
            code: code.to_string(),
        })
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_BOX, MSG_MAIN_CONTENT};

    #[test]
    fn translates_box_messages() {
        assert_eq!(t(Locale::EnUS, MSG_BOX), "Box");
        assert_eq!(t(Locale::EnUS, MSG_MAIN_CONTENT), "Main Content");
        assert_eq!(t(Locale::ZhCN, MSG_MAIN_CONTENT), "主要内容");
    }

    #[test]
    fn resolves_language_tags() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::EnUS));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("ZH"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn parses_or_reports_unknown_code() {
        assert_eq!("zh-CN".parse::<Locale>().ok(), Some(Locale::ZhCN));
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(Error::UnknownLocale { code }) if code == "fr"
        ));
    }

    #[test]
    fn display_names_are_native() {
        assert_eq!(Locale::EnUS.display_name(), "English");
        assert_eq!(Locale::ZhCN.display_name(), "中文");
    }
}
