//! Command-line argument definitions for the GlassGrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the starting grid, the edit script to
//! replay, the output path, configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the GlassGrid batch editor
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a grid JSON file to start from
    #[arg(help = "Path to the input grid (JSON)")]
    pub input: Option<String>,

    /// Builtin preset to start from when no input grid is given
    #[arg(short, long, conflicts_with = "input")]
    pub preset: Option<String>,

    /// Path to an edit script (JSON array of commands)
    #[arg(short, long)]
    pub script: Option<String>,

    /// Path to a template catalog (JSON object keyed by template id)
    #[arg(short, long)]
    pub templates: Option<String>,

    /// Path to the output grid JSON file, or `-` for stdout
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail on the first rejected command instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
