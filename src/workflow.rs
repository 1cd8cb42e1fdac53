use crate::agents::{ReleaseUpdater, UpdateReport};
use crate::cli::Cli;
use crate::config::{ProjectConfig, Settings, TOKEN_ENV};
use crate::error::{Result, UpdaterError};
use crate::modrinth::ModrinthClient;
use colored::Colorize;
use std::env;
use std::time::Duration;

/// Execute the update workflow
///
/// Startup problems (missing target version, token or configuration) are
/// returned as errors before any request is made. Once the run starts,
/// individual failures are only reported.
pub fn execute_update(cli: &Cli) -> Result<()> {
    let target_version = cli
        .target_version
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(UpdaterError::MissingTargetVersion)?;

    println!(
        "{}",
        "🚀 Starting Modrinth Automated Version Updater...".cyan().bold()
    );

    let settings = Settings::new(&cli.api_base, env::var(TOKEN_ENV).ok())?
        .with_delay(Duration::from_millis(cli.delay_ms))
        .with_dry_run(cli.dry_run)
        .with_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli.config)?;
    if config.is_empty() {
        println!(
            "{}",
            format!(
                "ℹ️  No projects found in '{}' to update. Exiting.",
                cli.config.display()
            )
            .yellow()
        );
        return Ok(());
    }

    println!(
        "🎯 Target Minecraft Version: {}\n",
        target_version.green().bold()
    );
    if settings.dry_run {
        println!("{}\n", "Dry run: no update requests will be sent".yellow());
    }
    if settings.verbose {
        eprintln!(
            "[VERBOSE] {} project(s) from {}, API {}",
            config.len(),
            cli.config.display(),
            settings.api_base
        );
    }

    let client = ModrinthClient::new(&settings)?;
    let report = ReleaseUpdater::new(&client, target_version)
        .with_delay(settings.delay)
        .with_dry_run(settings.dry_run)
        .run(&config);

    print_summary(&report, settings.dry_run);
    Ok(())
}

fn print_summary(report: &UpdateReport, dry_run: bool) {
    if dry_run {
        println!(
            "\n{}",
            format!(
                "✅ Done. {} version(s) would be updated.",
                report.planned.len()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "✅ Done. Successfully updated {} version(s).",
                report.updated_count()
            )
            .green()
            .bold()
        );
    }

    for change in &report.updated {
        println!(
            "   • {} {} ({})",
            change.project.white().bold(),
            change.version_number,
            change.release_id.dimmed()
        );
    }

    if report.skipped > 0 {
        println!(
            "   {}",
            format!("{} version(s) already supported the target.", report.skipped).dimmed()
        );
    }

    if !report.unmatched_projects.is_empty() {
        println!(
            "   {}",
            format!(
                "No configured labels matched in: {}",
                report.unmatched_projects.join(", ")
            )
            .yellow()
        );
    }

    if report.has_failures() {
        if !report.failed_projects.is_empty() {
            println!(
                "   {}",
                format!(
                    "Could not fetch versions for: {}",
                    report.failed_projects.join(", ")
                )
                .red()
            );
        }
        if report.failed_patches > 0 {
            println!(
                "   {}",
                format!("{} update request(s) failed.", report.failed_patches).red()
            );
        }
    }
}
