//! Error types for taxonomy lookups.

use thiserror::Error;

/// A specialized Result type for taxonomy operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while resolving taxonomy identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier that is not part of a closed enumeration.
    #[error("Unknown {kind}: '{id}'")]
    UnknownIdentifier {
        /// The enumeration that was searched (e.g. "country").
        kind: &'static str,
        /// The identifier as given.
        id: String,
    },

    /// A constraint label that belongs to none of the four dimensions.
    #[error("Unknown category label '{label}': not a region, sector, size or style")]
    UnknownCategory {
        /// The label as given.
        label: String,
    },
}

impl CoreError {
    /// Creates an unknown identifier error.
    #[must_use]
    pub fn unknown_identifier(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            kind,
            id: id.into(),
        }
    }

    /// Creates an unknown category error.
    #[must_use]
    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory {
            label: label.into(),
        }
    }
}
