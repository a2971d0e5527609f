//! `kind` command implementation

use clap::Subcommand;

use crate::cli::error::CliError;
use crate::cli::output::format_kind_list;
use crate::kind::{Kind, ScalarValue, detect_kind};

#[derive(Debug, Clone, Subcommand)]
pub enum KindCommand {
    /// Detect the kind of a textual value
    Detect {
        value: String,
        /// Report every value as String instead of inspecting its content
        #[arg(long)]
        no_sniff: bool,
    },
    /// List all kinds with their identifiers
    List,
    /// Look up a kind by name
    Parse {
        name: String,
        /// Fail on unrecognised names instead of reporting Invalid
        #[arg(long)]
        strict: bool,
    },
}

/// Handle the `kind` command
pub fn handle_kind(command: &KindCommand) -> Result<String, CliError> {
    match command {
        KindCommand::Detect { value, no_sniff } => {
            let kind = detect_kind(&ScalarValue::from(value), !no_sniff);
            Ok(kind.to_string())
        }
        KindCommand::List => Ok(format_kind_list(&Kind::ALL)),
        KindCommand::Parse { name, strict } => {
            let kind = if *strict {
                Kind::must_parse(name)?
            } else {
                Kind::parse(name)
            };
            Ok(kind.to_string())
        }
    }
}
