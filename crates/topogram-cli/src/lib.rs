//! CLI logic for the Topogram diagram tool.
//!
//! This module contains the core CLI logic for rendering catalog diagrams.

pub mod catalog;

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;

use std::str::FromStr;

use log::info;
use miette::Diagnostic;
use thiserror::Error;

use topogram::{DiagramRenderer, OutputFormat, TopogramError};

/// Errors surfaced by the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    Topogram(#[from] TopogramError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Unknown diagram '{0}'")]
    #[diagnostic(help("run with --list to see the available diagrams"))]
    UnknownDiagram(String),

    #[error("Unsupported output format '{0}'")]
    #[diagnostic(help("supported formats are png, svg, and dot"))]
    UnknownFormat(String),
}

/// Run the Topogram CLI application
///
/// This function resolves the requested catalog diagram, renders it through
/// the Topogram pipeline, and writes the resulting image to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Unknown diagram names or output formats
/// - Configuration loading errors
/// - Rendering errors (including a missing Graphviz installation)
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list {
        for name in catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let format = OutputFormat::from_str(&args.format)
        .map_err(|_| CliError::UnknownFormat(args.format.clone()))?;

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Resolve the catalog entry
    let diagram = catalog::build(&args.diagram)
        .ok_or_else(|| CliError::UnknownDiagram(args.diagram.clone()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.{}", diagram.output_stem(), format.extension()));

    info!(
        diagram_name = args.diagram,
        output_path = output;
        "Rendering diagram"
    );

    let renderer = DiagramRenderer::new(app_config);
    renderer.render_to_file(&diagram, format, &output)?;

    info!(output_file = output; "Diagram rendered successfully");

    Ok(())
}
