/*!
 * Error types for the captionkeys crate.
 *
 * Hotkey parsing and caption loading each get their own enum, built with
 * the thiserror crate. Runtime paths that must degrade silently (fetch,
 * measurement, missing editor handles) convert these into `None`/no-ops
 * before they reach a caller.
 */

use thiserror::Error;

/// Errors raised while parsing key combinations or hotkey configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotkeyError {
    /// The combo string (or one of its comma-separated synonyms) is blank
    #[error("empty key combination")]
    EmptyCombo,

    /// Only modifiers were given, e.g. `ctrl+shift`
    #[error("key combination '{0}' has no key, only modifiers")]
    MissingKey(String),

    /// More than one non-modifier key in a single synonym
    #[error("key combination '{combo}' names more than one key ('{extra}')")]
    MultipleKeys {
        /// Full synonym text
        combo: String,
        /// The surplus key token
        extra: String,
    },

    /// Unrecognised key token
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    /// Override refers to an action that does not exist
    #[error("unknown hotkey action '{0}'")]
    UnknownAction(String),
}

/// Errors that can occur while loading caption data
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Network-level failure
    #[error("Failed to fetch caption data: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Failed to fetch caption data: {status_code} {reason}")]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// Body was not valid JSON
    #[error("Failed to parse caption data: {0}")]
    Parse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from hotkey parsing
    #[error("Hotkey error: {0}")]
    Hotkey(#[from] HotkeyError),

    /// Error from caption loading
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<reqwest::Error> for CaptionError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.to_string())
    }
}

impl From<serde_json::Error> for CaptionError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
