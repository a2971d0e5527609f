//! Error types for kind lookups

use thiserror::Error;

/// Errors from the strict kind lookup paths
///
/// The lenient paths never produce these; they report [`Kind::Invalid`]
/// instead.
///
/// [`Kind::Invalid`]: super::Kind::Invalid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// Name does not match any known kind
    #[error("invalid data kind: '{name}'")]
    Unrecognized { name: String },

    /// Numeric identifier does not match any kind
    #[error("invalid data kind identifier: {0}")]
    UnknownId(u8),
}

/// Result type for strict kind lookups.
pub type KindResult<T> = Result<T, KindError>;
