//! Naming strategy configuration

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default maximum identifier length, in bytes
pub const DEFAULT_NAME_LENGTH: usize = 64;

/// Pre-processing step applied to raw names before case conversion
///
/// Returning an empty string means "no opinion": the raw name is used
/// verbatim.
pub trait NameReplacer: Send + Sync {
    fn replace(&self, name: &str) -> String;
}

impl<F> NameReplacer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn replace(&self, name: &str) -> String {
        self(name)
    }
}

/// Literal old -> new replacement pairs
///
/// At each position the first pair (in insertion order) whose `old`
/// matches is applied; replacements never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairReplacer {
    pairs: Vec<(String, String)>,
}

impl PairReplacer {
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .filter(|(old, _)| !old.is_empty())
                .collect(),
        }
    }
}

impl NameReplacer for PairReplacer {
    fn replace(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut rest = name;
        'scan: while !rest.is_empty() {
            for (old, new) in &self.pairs {
                if let Some(tail) = rest.strip_prefix(old.as_str()) {
                    out.push_str(new);
                    rest = tail;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
        out
    }
}

/// How names declared in a schema map to storage identifiers
///
/// Built once per schema and only read afterwards.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NamingStrategy {
    /// Maximum schema identifier length in bytes
    pub schema_name_length: usize,
    /// Maximum table identifier length in bytes
    pub table_name_length: usize,
    /// Maximum column identifier length in bytes
    pub column_name_length: usize,
    /// Prefix prepended to every table name
    pub table_prefix: String,
    /// Prefix prepended to every column name
    pub column_prefix: String,
    /// Use singular table names instead of pluralizing
    pub singular_table: bool,
    /// Keep the original letter case when deriving storage names
    #[serde(alias = "no_lower_case")]
    pub preserve_case: bool,
    /// Optional replacer run before case conversion
    #[serde(skip)]
    pub name_replacer: Option<Arc<dyn NameReplacer>>,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        Self {
            schema_name_length: DEFAULT_NAME_LENGTH,
            table_name_length: DEFAULT_NAME_LENGTH,
            column_name_length: DEFAULT_NAME_LENGTH,
            table_prefix: String::new(),
            column_prefix: String::new(),
            singular_table: false,
            preserve_case: false,
            name_replacer: None,
        }
    }
}

impl fmt::Debug for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingStrategy")
            .field("schema_name_length", &self.schema_name_length)
            .field("table_name_length", &self.table_name_length)
            .field("column_name_length", &self.column_name_length)
            .field("table_prefix", &self.table_prefix)
            .field("column_prefix", &self.column_prefix)
            .field("singular_table", &self.singular_table)
            .field("preserve_case", &self.preserve_case)
            .field("name_replacer", &self.name_replacer.is_some())
            .finish()
    }
}

impl NamingStrategy {
    /// Create a strategy with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a custom strategy
    pub fn builder() -> NamingStrategyBuilder {
        NamingStrategyBuilder::default()
    }
}

/// Builder for NamingStrategy
#[derive(Debug, Default)]
pub struct NamingStrategyBuilder {
    strategy: NamingStrategy,
}

impl NamingStrategyBuilder {
    /// Set the maximum schema identifier length
    pub fn schema_name_length(mut self, max: usize) -> Self {
        self.strategy.schema_name_length = max;
        self
    }

    /// Set the maximum table identifier length
    pub fn table_name_length(mut self, max: usize) -> Self {
        self.strategy.table_name_length = max;
        self
    }

    /// Set the maximum column identifier length
    pub fn column_name_length(mut self, max: usize) -> Self {
        self.strategy.column_name_length = max;
        self
    }

    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strategy.table_prefix = prefix.into();
        self
    }

    pub fn column_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strategy.column_prefix = prefix.into();
        self
    }

    /// Use singular table names
    pub fn singular_table(mut self, singular: bool) -> Self {
        self.strategy.singular_table = singular;
        self
    }

    /// Keep letter case when deriving storage names
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.strategy.preserve_case = preserve;
        self
    }

    /// Install a replacer run before case conversion
    pub fn name_replacer(mut self, replacer: impl NameReplacer + 'static) -> Self {
        self.strategy.name_replacer = Some(Arc::new(replacer));
        self
    }

    /// Build the strategy
    pub fn build(self) -> NamingStrategy {
        self.strategy
    }
}
