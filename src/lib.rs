//! Schema Toolkit SDK - identifier naming and data kind inference
//!
//! Provides:
//! - Translation between declared names and storage identifiers
//!   (`UserAccount` <-> `user_accounts`), initialism-aware in both
//!   directions, with bounded names for indexes and constraints
//! - Semantic kind detection for scalar values and kind name lookups
//! - A schema model that derives the storage layout of its tables
//!
//! ## Example
//!
//! ```rust
//! use schema_toolkit_sdk::{Column, Kind, Schema, Table};
//!
//! let mut schema = Schema::new("Shop".to_string(), String::new());
//! schema.create_table(Table::new(
//!     "OrderItem".to_string(),
//!     String::new(),
//!     vec![Column::new(Kind::Id, "ProductID".to_string(), "UUID".to_string())],
//! ));
//!
//! let layout = schema.storage_layout().unwrap();
//! assert_eq!(layout.tables[0].storage_name, "order_items");
//! assert_eq!(layout.tables[0].columns[0].storage_name, "product_id");
//! ```

pub mod kind;
pub mod models;
pub mod naming;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use kind::{Kind, KindError, ScalarValue, detect_kind, infer_column_kind, sniff_kind};
pub use models::{Column, ModelError, Schema, StorageLayout, Table};
pub use naming::{
    IdentifierTranslator, InitialismTable, NameField, NamingError, NamingStrategy,
};
