//! Loading naming strategies and schemas from files

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::error::CliError;
use crate::models::Schema;
use crate::naming::NamingStrategy;

/// File formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, String> {
        match self {
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load input content from file or stdin (`-`)
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load a naming strategy, picking the parser from the file extension
pub fn load_naming_strategy(path: &Path) -> Result<NamingStrategy, CliError> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;

    let strategy: NamingStrategy = format
        .parse(&content)
        .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), ?strategy, "Loaded naming strategy");
    Ok(strategy)
}

/// Load a schema from a JSON or YAML file, or from stdin as JSON
pub fn load_schema(input: &str) -> Result<Schema, CliError> {
    let format = if input == "-" {
        FileFormat::Json
    } else {
        FileFormat::from_path(Path::new(input))?
    };
    let content = load_input(input)?;

    let schema = match format {
        FileFormat::Json => Schema::from_json(&content)?,
        FileFormat::Yaml => Schema::from_yaml(&content)?,
        FileFormat::Toml => {
            return Err(CliError::UnsupportedFormat(PathBuf::from(input)));
        }
    };
    tracing::debug!(schema = %schema.name, tables = schema.tables.len(), "Loaded schema");
    Ok(schema)
}
