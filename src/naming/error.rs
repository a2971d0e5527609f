//! Error types for identifier naming

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which configured length limit a name is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    Schema,
    Table,
    Column,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::Schema => write!(f, "schema name"),
            NameField::Table => write!(f, "table name"),
            NameField::Column => write!(f, "column name"),
        }
    }
}

/// Errors reported when checking derived identifiers
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingError {
    /// Identifier is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(NameField),

    /// Identifier exceeds the configured maximum length
    #[error("{field} '{name}' exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: NameField,
        name: String,
        max: usize,
        actual: usize,
    },
}

/// Result type for naming checks.
pub type NamingResult<T> = Result<T, NamingError>;
