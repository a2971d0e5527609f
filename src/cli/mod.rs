//! CLI module for the schema-toolkit-cli binary

pub mod commands;
pub mod error;
pub mod loader;
pub mod output;

pub use error::CliError;
pub use output::OutputFormat;
