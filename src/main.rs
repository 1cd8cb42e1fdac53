mod agents;
mod cli;
mod config;
mod error;
mod modrinth;
mod repository;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::UpdaterError;
use std::process;

fn main() {
    let cli = Cli::parse();

    match workflow::execute_update(&cli) {
        Ok(()) => {}
        Err(UpdaterError::MissingTargetVersion) => {
            println!(
                "{} {}",
                "Error:".red().bold(),
                UpdaterError::MissingTargetVersion
            );
            println!("   Usage: mrgv <TARGET_VERSION> [--config main.json]");
            println!("   Example: mrgv 1.21.9");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
