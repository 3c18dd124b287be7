//! Command-line argument definitions for the Topogram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument has a default chosen so that a bare
//! `topogram` invocation renders the `architecture` diagram to
//! `architecture.png` in the working directory.

use clap::Parser;

/// Command-line arguments for the Topogram diagram tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Name of the catalog diagram to render
    #[arg(default_value = "architecture")]
    pub diagram: String,

    /// Path to the output file (defaults to <diagram>.<format> in the working directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// List available diagrams and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
