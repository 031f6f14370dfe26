//! Error types for the fallible conveniences of the crate
//!
//! Parsing, lookups and rendering never fail. Only the helpers that convert
//! strings into typed values (colors, targets, typed argument lookups) return
//! errors.

use thiserror::Error;

/// Errors returned by the typed helpers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A color name that is not part of the palette
    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    /// A style target other than background / foreground
    #[error("Unknown style target: {0} (expected 'bg', 'background', 'fg' or 'foreground')")]
    UnknownTarget(String),

    /// A typed lookup hit a flag that was given without a value
    #[error("Argument '{name}' was given as a flag without a value")]
    MissingValue { name: String },

    /// A typed lookup could not convert the argument value
    #[error("Invalid value '{value}' for argument '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
