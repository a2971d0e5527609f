//! Schema model and storage layout derivation

use serde::{Deserialize, Serialize};

use super::error::ModelResult;
use super::table::Table;
use crate::kind::Kind;
use crate::naming::{IdentifierTranslator, InitialismTable, NameField, NamingStrategy};

/// Default schema encoding and column charset
pub const DEFAULT_CHARSET: &str = "UTF-8";

pub(crate) fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

/// A named collection of tables sharing one naming strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Deprecation notice; empty when the schema is current
    #[serde(default)]
    pub deprecated: String,
    /// Link or free text pointing at external documentation
    #[serde(default)]
    pub documentation: String,
    #[serde(default = "default_charset")]
    pub encoding: String,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub naming_strategy: NamingStrategy,
}

/// Storage identifiers derived for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name: String,
    pub storage_name: String,
    pub kind: Kind,
}

/// Storage identifiers derived for one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub name: String,
    pub storage_name: String,
    pub columns: Vec<ColumnLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unique_indexes: Vec<String>,
}

/// Storage identifiers derived for a whole schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageLayout {
    pub name: String,
    pub storage_name: String,
    pub tables: Vec<TableLayout>,
}

impl Schema {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            deprecated: String::new(),
            documentation: String::new(),
            encoding: default_charset(),
            tables: Vec::new(),
            naming_strategy: NamingStrategy::default(),
        }
    }

    /// Replace the naming strategy
    pub fn with_naming_strategy(mut self, strategy: NamingStrategy) -> Self {
        self.naming_strategy = strategy;
        self
    }

    /// A translator bound to this schema's naming strategy
    pub fn translator(&self) -> IdentifierTranslator<'_> {
        IdentifierTranslator::new(&self.naming_strategy, InitialismTable::shared())
    }

    /// Add a table unless one with the same name already exists
    ///
    /// Returns `false` when the table was not added.
    pub fn create_table(&mut self, table: Table) -> bool {
        if self.table_position(&table.name).is_some() {
            return false;
        }
        self.tables.push(table);
        true
    }

    /// Remove a table by name, returning it if present
    pub fn drop_table(&mut self, name: &str) -> Option<Table> {
        self.table_position(name).map(|index| self.tables.remove(index))
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    pub fn table_position(&self, name: &str) -> Option<usize> {
        self.tables.iter().position(|t| t.name == name)
    }

    /// Derive storage names for every table, column and index
    ///
    /// Fails on the first identifier that is empty or longer than the
    /// strategy allows.
    pub fn storage_layout(&self) -> ModelResult<StorageLayout> {
        let translator = self.translator();

        let storage_name = translator.storage_name(&self.name);
        translator.check_length(NameField::Schema, &storage_name)?;

        let mut tables = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            let table_storage = translator.table_name(&table.name);
            translator.check_length(NameField::Table, &table_storage)?;

            let mut layout = TableLayout {
                name: table.name.clone(),
                storage_name: table_storage.clone(),
                columns: Vec::with_capacity(table.columns.len()),
                indexes: Vec::new(),
                unique_indexes: Vec::new(),
            };

            for column in &table.columns {
                let column_storage = translator.column_name(&table_storage, &column.name);
                translator.check_length(NameField::Column, &column_storage)?;

                if column.index {
                    layout
                        .indexes
                        .push(translator.index_name(&table_storage, &column.name));
                }
                if column.unique {
                    layout
                        .unique_indexes
                        .push(translator.unique_index_name(&table_storage, &column.name));
                }

                layout.columns.push(ColumnLayout {
                    name: column.name.clone(),
                    storage_name: column_storage,
                    kind: column.kind,
                });
            }

            tracing::debug!(
                table = %table.name,
                storage_name = %layout.storage_name,
                columns = layout.columns.len(),
                "Derived table layout"
            );
            tables.push(layout);
        }

        Ok(StorageLayout {
            name: self.name.clone(),
            storage_name,
            tables,
        })
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> ModelResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> ModelResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
