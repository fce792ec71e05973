//! Command-line interface for the soldot utility
//!
//! Reads a JSON class-model document produced by an upstream Solidity
//! parser and writes the rendered dot document. Feed the output to the
//! Graphviz `dot` binary to produce an image.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use soldot::{render_diagram, ClassDiagramOptions, ClassModel};

/// Soldot - Render Solidity class models as Graphviz dot UML diagrams
#[derive(Parser)]
#[command(name = "soldot")]
#[command(about = "Render Solidity contract class models as Graphviz dot UML diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Input file containing the JSON class-model document (use - for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file for the dot document (use - for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the attribute section of every class
    #[arg(long)]
    pub hide_attributes: bool,

    /// Omit the operator section of every class
    #[arg(long)]
    pub hide_operators: bool,

    /// Omit auxiliary nodes for nested structs
    #[arg(long)]
    pub hide_structs: bool,

    /// Omit auxiliary nodes for nested enums
    #[arg(long)]
    pub hide_enums: bool,

    /// Suppress library classes entirely
    #[arg(long)]
    pub hide_libraries: bool,

    /// Suppress interface classes entirely
    #[arg(long)]
    pub hide_interfaces: bool,

    /// Drop the Private and Internal visibility groups
    #[arg(long)]
    pub hide_internals: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Accepted shapes of the input document: a bare class array, or an object
/// wrapping one under a `classes` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelDocument {
    Classes(Vec<ClassModel>),
    Wrapped { classes: Vec<ClassModel> },
}

impl ModelDocument {
    fn into_classes(self) -> Vec<ClassModel> {
        match self {
            ModelDocument::Classes(classes) => classes,
            ModelDocument::Wrapped { classes } => classes,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let input = read_input(cli.input.as_deref())?;

    let classes = parse_model_document(&input)?;
    debug!(classes = classes.len(), "loaded class models");

    let options = options_from_cli(&cli);
    let dot = render_diagram(&classes, &options)?;

    write_output(cli.output.as_deref(), &dot)?;
    info!(classes = classes.len(), "rendered dot document");

    Ok(())
}

fn options_from_cli(cli: &Cli) -> ClassDiagramOptions {
    ClassDiagramOptions {
        hide_attributes: cli.hide_attributes,
        hide_operators: cli.hide_operators,
        hide_structs: cli.hide_structs,
        hide_enums: cli.hide_enums,
        hide_libraries: cli.hide_libraries,
        hide_interfaces: cli.hide_interfaces,
        hide_internals: cli.hide_internals,
    }
}

fn parse_model_document(input: &str) -> Result<Vec<ClassModel>> {
    let document: ModelDocument =
        serde_json::from_str(input).context("failed to parse class-model JSON")?;
    Ok(document.into_classes())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&std::path::Path>, dot: &str) -> Result<()> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::write(path, dot)
            .with_context(|| format!("failed to write output file {}", path.display())),
        _ => {
            io::stdout()
                .write_all(dot.as_bytes())
                .context("failed to write stdout")?;
            Ok(())
        }
    }
}
