use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid definition for language '{language}': {reason}")]
    InvalidLanguageDefinition { language: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ScanError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownLanguage(_) => "Language",
            Self::InvalidLanguageDefinition { .. } | Self::Config(_) | Self::TomlParse(_) => {
                "Config"
            }
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// The underlying cause, for errors that wrap one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        std::error::Error::source(self).map(ToString::to_string)
    }

    /// Actionable hint shown below the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownLanguage(_) => {
                Some("Run `comment-scan languages` to list the supported language ids")
            }
            Self::InvalidLanguageDefinition { .. } => {
                Some("Check the [languages] section of your configuration file")
            }
            Self::InvalidPattern { .. } => Some("Exclude patterns use glob syntax, e.g. `target/**`"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
