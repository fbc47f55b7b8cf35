//! Command-line interface definitions for the drone intelligence brief.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Output directories can also be provided via environment variables.

use clap::Parser;

/// Command-line arguments for the collection run.
///
/// # Examples
///
/// ```sh
/// # Full comprehensive sweep
/// drone_intel_brief -d ./data -s ./docs
///
/// # Time-boxed priority run
/// drone_intel_brief -d ./data -s ./docs --priority
///
/// # With a config file
/// drone_intel_brief -d ./data -s ./docs -c ./config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the JSON snapshot and backups
    #[arg(short, long, env = "DATA_OUTPUT_DIR")]
    pub data_output_dir: String,

    /// Output directory for the rendered HTML brief
    #[arg(short, long, env = "SITE_OUTPUT_DIR")]
    pub site_output_dir: String,

    /// Run only the reduced priority query plan
    #[arg(short, long)]
    pub priority: bool,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,
}
