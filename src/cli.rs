use crate::config::{DEFAULT_API_BASE, DEFAULT_CONFIG_FILE, DEFAULT_DELAY_MS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mrgv",
    about = "Add a supported game version to selected Modrinth project releases",
    version
)]
pub struct Cli {
    /// Game version to add to every matching release (e.g. 1.21.9)
    #[arg(value_name = "TARGET_VERSION")]
    pub target_version: Option<String>,

    /// JSON file mapping project slugs to release labels
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Base URL of the Modrinth API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Pause after each update request, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Print the planned changes without sending any update request
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
