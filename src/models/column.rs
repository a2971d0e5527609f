//! Column model

use serde::{Deserialize, Serialize};

use super::schema::default_charset;
use crate::kind::{Kind, ScalarValue, infer_column_kind};

/// A single column of a table
///
/// # Example
///
/// ```rust
/// use schema_toolkit_sdk::kind::Kind;
/// use schema_toolkit_sdk::models::Column;
///
/// let column = Column::new(Kind::Int64, "Id".to_string(), "BIGINT".to_string());
/// assert!(column.nullable);
/// assert_eq!(column.charset, "UTF-8");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    /// Semantic kind; `Invalid` until declared or inferred
    #[serde(default)]
    pub kind: Kind,
    /// Declared (schema-facing) column name
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deprecated: String,
    /// Storage engine type, e.g. `BIGINT`
    #[serde(default)]
    pub native_kind: String,
    /// Maximum length for character and binary kinds, 0 when unbounded
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub numeric_precision: u32,
    #[serde(default)]
    pub numeric_scale: u32,
    /// Fractional second digits kept for temporal kinds
    #[serde(default)]
    pub date_time_precision: u32,
    #[serde(default)]
    pub codec: String,
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Default value expression, stored verbatim
    #[serde(default)]
    pub default: String,
    /// Validation rule, stored verbatim
    #[serde(default)]
    pub validation: String,
    /// Masking replacement used when the column is sensitive
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub primary: bool,
    /// Whether a plain index is created for this column
    #[serde(default)]
    pub index: bool,
    /// Whether a unique index is created for this column
    #[serde(default)]
    pub unique: bool,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default = "default_true")]
    pub creatable: bool,
    #[serde(default = "default_true")]
    pub updatable: bool,
    #[serde(default = "default_true")]
    pub readable: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(kind: Kind, name: String, native_kind: String) -> Self {
        Self {
            kind,
            name,
            description: String::new(),
            deprecated: String::new(),
            native_kind,
            length: 0,
            numeric_precision: 0,
            numeric_scale: 0,
            date_time_precision: 0,
            codec: String::new(),
            charset: default_charset(),
            default: String::new(),
            validation: String::new(),
            replacement: String::new(),
            sensitive: false,
            auto_increment: false,
            primary: false,
            index: false,
            unique: false,
            nullable: true,
            creatable: true,
            updatable: true,
            readable: true,
        }
    }

    /// Derive the kind from sample data when none was declared
    ///
    /// A declared kind is never overwritten. Returns the column's kind
    /// after the call.
    pub fn infer_kind<'a, I>(&mut self, samples: I, sniff: bool) -> Kind
    where
        I: IntoIterator<Item = ScalarValue<'a>>,
    {
        if self.kind.is_valid() {
            return self.kind;
        }

        self.kind = infer_column_kind(samples, sniff);
        tracing::debug!(column = %self.name, kind = %self.kind, "Inferred column kind");
        self.kind
    }
}
