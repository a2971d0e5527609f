//! schema-toolkit-cli: identifier translation and kind inference

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schema_toolkit_sdk::cli::CliError;
use schema_toolkit_sdk::cli::OutputFormat;
use schema_toolkit_sdk::cli::commands::{
    KindCommand, LayoutArgs, NameCommand, handle_kind, handle_layout, handle_name,
};
use schema_toolkit_sdk::cli::loader::load_naming_strategy;
use tracing::Level;

#[derive(Parser)]
#[command(name = "schema-toolkit-cli")]
#[command(about = "Storage identifier naming and data kind inference")]
#[command(version)]
struct Cli {
    /// Naming strategy file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log format: text or json
    #[arg(long, default_value = "text", global = true)]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn", global = true)]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate identifiers between schema and storage form
    Name {
        #[command(subcommand)]
        command: NameCommand,
    },
    /// Detect, list and parse data kinds
    Kind {
        #[command(subcommand)]
        command: KindCommand,
    },
    /// Print the storage layout of a schema file
    Layout {
        /// Schema file (JSON or YAML), or - for JSON on stdin
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity, &cli.log_format);

    let strategy = cli
        .config
        .as_deref()
        .map(load_naming_strategy)
        .transpose()?;

    let output = match cli.command {
        Commands::Name { command } => handle_name(&strategy.unwrap_or_default(), &command)?,
        Commands::Kind { command } => handle_kind(&command)?,
        Commands::Layout { input, format } => handle_layout(LayoutArgs {
            input,
            strategy,
            format,
        })?,
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
