//! Table model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::column::Column;

/// A table and its columns
///
/// Documents without an `id` get the deterministic id derived from the
/// table name, see [`Table::generate_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "TableDocument")]
pub struct Table {
    pub id: Uuid,
    /// Declared (schema-facing) table name
    pub name: String,
    pub description: String,
    /// Deprecation notice; empty when the table is current
    pub deprecated: String,
    /// Storage engine, e.g. `InnoDB`
    pub engine: String,
    pub codec: String,
    pub charset: String,
    pub read_only: bool,
    pub columns: Vec<Column>,
}

/// Serialized form of [`Table`] with an optional id
#[derive(Deserialize)]
struct TableDocument {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    deprecated: String,
    #[serde(default)]
    engine: String,
    #[serde(default)]
    codec: String,
    #[serde(default)]
    charset: String,
    #[serde(default)]
    read_only: bool,
    #[serde(default)]
    columns: Vec<Column>,
}

impl From<TableDocument> for Table {
    fn from(doc: TableDocument) -> Self {
        let id = doc.id.unwrap_or_else(|| Table::generate_id(&doc.name));
        Self {
            id,
            name: doc.name,
            description: doc.description,
            deprecated: doc.deprecated,
            engine: doc.engine,
            codec: doc.codec,
            charset: doc.charset,
            read_only: doc.read_only,
            columns: doc.columns,
        }
    }
}

impl Table {
    pub fn new(name: String, description: String, columns: Vec<Column>) -> Self {
        let id = Self::generate_id(&name);
        let mut table = Self {
            id,
            name,
            description,
            deprecated: String::new(),
            engine: String::new(),
            codec: String::new(),
            charset: String::new(),
            read_only: false,
            columns: Vec::new(),
        };
        for column in columns {
            table.create_column(column);
        }
        table
    }

    /// Generate a deterministic UUID v5 from the table name
    pub fn generate_id(name: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
    }

    /// Add a column unless one with the same name already exists
    ///
    /// Returns `false` when the column was not added.
    pub fn create_column(&mut self, column: Column) -> bool {
        if self.column_position(&column.name).is_some() {
            return false;
        }
        self.columns.push(column);
        true
    }

    /// Remove a column by name, returning it if present
    pub fn drop_column(&mut self, name: &str) -> Option<Column> {
        self.column_position(name)
            .map(|index| self.columns.remove(index))
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}
