//! `name` command implementation

use clap::Subcommand;

use crate::cli::error::CliError;
use crate::naming::{IdentifierTranslator, InitialismTable, NameField, NamingStrategy};

/// Identifier translations exposed on the command line
#[derive(Debug, Clone, Subcommand)]
pub enum NameCommand {
    /// Convert a declared name to its snake_case storage form
    Storage { name: String },
    /// Derive a schema (PascalCase) name from a storage table name
    Schema { table: String },
    /// Storage name for a table
    Table { name: String },
    /// Storage name for a column
    Column { table: String, column: String },
    /// Storage name for a join table
    Join { name: String },
    /// Name of a plain index
    Index { table: String, column: String },
    /// Name of a unique index
    Unique { table: String, column: String },
    /// Name of a check constraint
    Check { table: String, column: String },
}

/// Handle the `name` command, returning the translated identifier
///
/// Storage names for tables and columns are checked against the
/// strategy's length limits.
pub fn handle_name(strategy: &NamingStrategy, command: &NameCommand) -> Result<String, CliError> {
    let translator = IdentifierTranslator::new(strategy, InitialismTable::shared());

    let name = match command {
        NameCommand::Storage { name } => translator.storage_name(name),
        NameCommand::Schema { table } => translator.schema_name(table),
        NameCommand::Table { name } => {
            let table = translator.table_name(name);
            translator.check_length(NameField::Table, &table)?;
            table
        }
        NameCommand::Column { table, column } => {
            let column = translator.column_name(table, column);
            translator.check_length(NameField::Column, &column)?;
            column
        }
        NameCommand::Join { name } => {
            let table = translator.join_table_name(name);
            translator.check_length(NameField::Table, &table)?;
            table
        }
        NameCommand::Index { table, column } => translator.index_name(table, column),
        NameCommand::Unique { table, column } => translator.unique_index_name(table, column),
        NameCommand::Check { table, column } => translator.checker_name(table, column),
    };

    Ok(name)
}
