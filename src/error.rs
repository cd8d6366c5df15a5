//! Error types for layout-kit
//!
//! Loading a box configuration and persisting settings can fail;
//! rendering cannot.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// No home directory to place the settings file under
    #[snafu(display("Could not determine the configuration directory"))]
    ConfigDirUnavailable {},

    /// Config file whose extension names no known format
    #[snafu(display("Unsupported config file {}: expected .toml or .json", path.display()))]
    UnsupportedConfigFile { path: PathBuf },

    /// Tag that is not a valid HTML element name
    #[snafu(display("Invalid tag name {name:?}"))]
    InvalidTagName { name: String },

    /// Attribute key that is not a valid HTML attribute name
    #[snafu(display("Invalid attribute name {name:?}"))]
    InvalidAttributeName { name: String },

    /// Locale code with no message file
    #[snafu(display("Unknown locale {code:?}"))]
    UnknownLocale { code: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
