//! Settings
//!
//! Persisted preferences of the command-line renderer, stored as TOML in
//! the platform configuration directory.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const SETTINGS_FILE: &str = "layout-kit.toml";

/// Render output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML markup
    #[default]
    Html,
    /// Element tree as JSON
    Json,
}

fn get_settings_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    locale: Option<String>,
    output: Option<OutputFormat>,
}

impl Settings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        Self::from_toml_str(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
        })
    }

    /// Parse settings; an empty document yields the defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Write settings back to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_settings_path()?;
        std::fs::write(&path, self.to_toml_string()?)?;
        info!(path = ?path, "Saved settings file");
        Ok(())
    }

    /// Settings as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configured locale, or the system locale when unset or unknown
    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_else(Locale::system)
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }

    pub fn set_output(&mut self, output: OutputFormat) {
        self.output = Some(output);
    }
}
