//! `layout` command implementation

use crate::cli::error::CliError;
use crate::cli::loader::load_schema;
use crate::cli::output::OutputFormat;
use crate::naming::NamingStrategy;

/// Arguments for the `layout` command
pub struct LayoutArgs {
    /// Schema file (JSON or YAML), or `-` for JSON on stdin
    pub input: String,
    /// Overrides the schema's own naming strategy when set
    pub strategy: Option<NamingStrategy>,
    pub format: OutputFormat,
}

/// Handle the `layout` command, rendering the schema's storage layout
pub fn handle_layout(args: LayoutArgs) -> Result<String, CliError> {
    let mut schema = load_schema(&args.input)?;
    if let Some(strategy) = args.strategy {
        schema.naming_strategy = strategy;
    }

    let layout = schema.storage_layout()?;
    tracing::info!(
        schema = %schema.name,
        tables = layout.tables.len(),
        "Computed storage layout"
    );
    args.format.render(&layout)
}
