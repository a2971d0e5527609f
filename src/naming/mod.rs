//! Identifier naming translation
//!
//! Converts human-authored names (`UserAccount`, `HTTPServer`) to storage
//! identifiers (`user_accounts`, `http_server`) and back, with
//! initialism-aware casing and bounded, collision-safe composite names for
//! indexes and constraints.
//!
//! ## Example
//!
//! ```rust
//! use schema_toolkit_sdk::naming::{IdentifierTranslator, InitialismTable, NamingStrategy};
//!
//! let strategy = NamingStrategy::builder().table_prefix("app_").build();
//! let translator = IdentifierTranslator::new(&strategy, InitialismTable::shared());
//!
//! assert_eq!(translator.table_name("UserID"), "app_user_ids");
//! assert_eq!(translator.index_name("app_users", "EmailAddress"), "idx_app_users_email_address");
//! ```

mod config;
mod error;
mod inflection;
mod initialisms;
mod translator;

pub use config::{
    DEFAULT_NAME_LENGTH, NameReplacer, NamingStrategy, NamingStrategyBuilder, PairReplacer,
};
pub use error::{NameField, NamingError, NamingResult};
pub use inflection::{EnglishInflector, Inflector, NoopInflector};
pub use initialisms::{COMMON_INITIALISMS, InitialismTable};
pub use translator::{COMPOSITE_NAME_MAX_LENGTH, IdentifierTranslator};
