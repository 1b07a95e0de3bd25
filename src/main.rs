//! schema-to-tool — JSON Schema to LLM tool definitions.
//!
//! Usage:
//!   schema-to-tool convert schema.json --format openai
//!   schema-to-tool convert schema.json -f anthropic -o tool.json
//!   schema-to-tool validate tool.json --format openai

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use schema_to_tool::config::{self, ToolConfig};
use schema_to_tool::converter::{to_pretty_json, write_atomic};
use schema_to_tool::{ConvertError, SchemaConverter, ToolFormat};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "schema-to-tool")]
#[command(version)]
#[command(about = "Convert JSON Schema to OpenAI/Anthropic tool definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a JSON Schema file to a tool definition.
    Convert {
        /// Path to the JSON Schema file to convert.
        schema_file: PathBuf,

        /// Output format for the tool definition.
        #[arg(short, long, value_enum)]
        format: Option<ToolFormat>,

        /// Output file path. If not specified, prints to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON indentation level (default: 2).
        #[arg(short, long)]
        indent: Option<usize>,

        /// Rewrite the tool name into a function-safe identifier.
        #[arg(long)]
        normalize_names: bool,
    },

    /// Validate a tool definition file (a single tool or an array of tools).
    Validate {
        /// Path to the tool definition JSON file to validate.
        tool_file: PathBuf,

        /// Format of the tool definition to validate.
        #[arg(short, long, value_enum)]
        format: Option<ToolFormat>,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli
        .config
        .as_deref()
        .map(config::expand_path)
        .unwrap_or_else(config::default_config_path);
    let cfg = config::load_config(&config_path)?;

    // Initialize logging (stderr, so stdout stays pure JSON)
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Using config {}", config_path.display());

    match cli.command {
        Commands::Convert {
            schema_file,
            format,
            output,
            indent,
            normalize_names,
        } => {
            let format = resolve_format(format, &cfg)?;
            let indent = indent.unwrap_or(cfg.indent);
            let mut options = cfg.convert_options();
            options.normalize_names |= normalize_names;
            cmd_convert(&schema_file, format, output.as_deref(), indent, options)
        }
        Commands::Validate { tool_file, format } => {
            let format = resolve_format(format, &cfg)?;
            cmd_validate(&tool_file, format)
        }
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_convert(
    schema_file: &Path,
    format: ToolFormat,
    output: Option<&Path>,
    indent: usize,
    options: schema_to_tool::ConvertOptions,
) -> Result<ExitCode> {
    let converter = SchemaConverter::from_file(schema_file)?.with_options(options);
    let tool = converter.convert_to(format);
    let rendered = to_pretty_json(&tool, indent)?;

    match output {
        Some(path) => {
            write_atomic(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} tool definition to {}", format, path.display());
            println!("Tool definition written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(tool_file: &Path, format: ToolFormat) -> Result<ExitCode> {
    let text = std::fs::read_to_string(tool_file).map_err(|e| ConvertError::io(tool_file, e))?;
    let document: Value = serde_json::from_str(&text)
        .map_err(|e| ConvertError::malformed(format!("Invalid JSON: {}", e)))?;

    let tools = match document {
        Value::Array(tools) => tools,
        single => vec![single],
    };

    let mut all_valid = true;
    for (i, tool) in tools.iter().enumerate() {
        let report = format.validate(tool);
        let tool_name = format
            .tool_name(tool)
            .map(str::to_string)
            .unwrap_or_else(|| format!("tool[{}]", i));

        if report.is_valid() {
            println!(
                "{} {}: Valid {} tool definition",
                "[OK]".green().bold(),
                tool_name,
                format
            );
        } else {
            all_valid = false;
            println!(
                "{} {}: Invalid {} tool definition",
                "[ERROR]".red().bold(),
                tool_name,
                format
            );
            for error in report.errors() {
                println!("  - {}", error);
            }
        }
    }

    info!("Validated {} tool(s) from {}", tools.len(), tool_file.display());

    if all_valid {
        println!("\nAll tool definitions are valid.");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("\n{}", "Some tool definitions have errors.".red());
        Ok(ExitCode::FAILURE)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_format(flag: Option<ToolFormat>, cfg: &ToolConfig) -> Result<ToolFormat> {
    match flag.or(cfg.format) {
        Some(format) => Ok(format),
        None => bail!(
            "--format is required (openai or anthropic), or set `format` in the config file"
        ),
    }
}
