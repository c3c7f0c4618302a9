//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Trellis class-model tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model XML file
    #[arg(help = "Path to the model XML file")]
    pub model: String,

    /// Path to the base configuration snapshot (JSON)
    #[arg(help = "Path to the base config snapshot")]
    pub base: String,

    /// Path to the patched configuration snapshot (JSON)
    #[arg(help = "Path to the patched config snapshot")]
    pub patched: String,

    /// Directory the output files are written to
    #[arg(short, long, default_value = "out")]
    pub out_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
