//! Schema models
//!
//! Schemas hold tables, tables hold columns. A schema carries the naming
//! strategy used to derive storage identifiers for everything inside it.

pub mod column;
pub mod error;
pub mod schema;
pub mod table;

pub use column::Column;
pub use error::{ModelError, ModelResult};
pub use schema::{ColumnLayout, DEFAULT_CHARSET, Schema, StorageLayout, TableLayout};
pub use table::Table;
