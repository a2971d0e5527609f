//! Output formatting for CLI

use serde::Serialize;

use super::error::CliError;
use crate::kind::Kind;

/// Structured output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Render a serializable value in this format
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, CliError> {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map_err(|e| CliError::OutputError(e.to_string())),
            OutputFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| CliError::OutputError(e.to_string()))
            }
        }
    }
}

/// One line per kind: numeric identifier, canonical name, classification
pub fn format_kind_list(kinds: &[Kind]) -> String {
    let mut output = String::new();
    for kind in kinds {
        output.push_str(&format!(
            "{:>2}  {:<10}{}\n",
            kind.as_u8(),
            kind.as_str(),
            classification(*kind)
        ));
    }
    output
}

fn classification(kind: Kind) -> &'static str {
    if !kind.is_valid() {
        "-"
    } else if kind.is_integer() {
        "integer"
    } else if kind.is_float() {
        "float"
    } else if kind.is_temporal() {
        "temporal"
    } else {
        "scalar"
    }
}
