//! Core error types for pomotimer-core.
//!
//! Each collaborator has its own error enum so callers can decide locally
//! whether a failure is recovered (settings, quotes, playback) or surfaced
//! to the user (validation).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomotimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Settings form errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Quote service errors
    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    /// Notification sound errors
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading or writing the persisted settings record.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a well-formed record.
    #[error("Failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record parsed but violates an invariant.
    #[error("Invalid settings value for '{key}': {message}")]
    Invalid { key: String, message: String },

    /// The settings file could not be written.
    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors in user input from the settings view.
///
/// None of these mutate state: a form is either applied in full or not at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A duration field is not a positive whole number of minutes.
    #[error("{field} must be a positive whole number of minutes, got '{value}'")]
    InvalidDuration { field: &'static str, value: String },

    /// The custom colour is not a `#RRGGBB` hex code.
    #[error("'{0}' is not a hex color code like #1F538D")]
    InvalidHexColor(String),

    /// The custom colour entry lacks a hex code or a name.
    #[error("Hex code entry must contain a hex code and a name, got '{0}'")]
    IncompleteCustomColor(String),

    /// The selected colour is not in the palette.
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    /// The theme is not one of System, Light, Dark.
    #[error("Unknown theme '{0}', expected System, Light or Dark")]
    UnknownTheme(String),
}

/// Errors fetching a motivational quote.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Transport or decoding failure.
    #[error("Quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Quote service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The service answered with no quote.
    #[error("Quote service returned no quotes")]
    Empty,

    /// The configured service URL cannot be used.
    #[error("Invalid quote service URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors playing the notification sound.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The sound asset does not exist.
    #[error("Sound asset not found: {0}")]
    AssetMissing(PathBuf),

    /// No audio player is available on this platform.
    #[error("No audio player available to play {0}")]
    NoPlayer(PathBuf),

    /// The player process could not be started.
    #[error("Failed to start audio player '{player}': {source}")]
    Spawn {
        player: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
