//! This module defines the error taxonomy of the engine. Every error carries enough
//! structured detail for a presentation layer to render a specific message.

use serde::Serialize;

/// An error returned by the engine.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineError {
    /// Malformed or out-of-range caller input. Not retried, surfaced to caller immediately.
    Validation {
        /// An offending input field.
        field: String,
        /// A possible error cause.
        cause: String,
        /// An action to take in order to recover from error.
        action: String,
    },
    /// No route candidates could be produced for the requested corridor.
    NoRouteAvailable {
        /// A requested origin.
        origin: String,
        /// A requested destination.
        destination: String,
        /// An action to take in order to recover from error.
        action: String,
    },
    /// The fleet cannot accept any assignment.
    NoCapacity {
        /// A violated constraint description.
        cause: String,
        /// An action to take in order to recover from error.
        action: String,
    },
}

/// A type alias for result type with `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Creates a validation error for the given field.
    pub fn validation<F, C, A>(field: F, cause: C, action: A) -> Self
    where
        F: Into<String>,
        C: Into<String>,
        A: Into<String>,
    {
        Self::Validation { field: field.into(), cause: cause.into(), action: action.into() }
    }

    /// Returns a stable error code usable by the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E1001",
            Self::NoRouteAvailable { .. } => "E1101",
            Self::NoCapacity { .. } => "E1201",
        }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).expect("cannot serialize error")
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, cause, action } => {
                write!(f, "{}, field: '{field}', cause: '{cause}', action: '{action}'.", self.code())
            }
            Self::NoRouteAvailable { origin, destination, action } => {
                write!(f, "{}, cause: 'no route between {origin} and {destination}', action: '{action}'.", self.code())
            }
            Self::NoCapacity { cause, action } => {
                write!(f, "{}, cause: '{cause}', action: '{action}'.", self.code())
            }
        }
    }
}

impl std::error::Error for EngineError {}
