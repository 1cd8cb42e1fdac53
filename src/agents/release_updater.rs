use crate::agents::report::{ReleaseChange, UpdateReport};
use crate::config::{DEFAULT_DELAY_MS, ProjectConfig};
use crate::modrinth::merge_game_versions;
use crate::repository::{Release, ReleaseCatalog};
use colored::Colorize;
use std::thread;
use std::time::Duration;

/// ReleaseUpdater walks the configured projects and adds the target game
/// version to every matching release that lacks it.
pub struct ReleaseUpdater<'a> {
    catalog: &'a dyn ReleaseCatalog,
    target_version: String,
    delay: Duration,
    dry_run: bool,
}

impl<'a> ReleaseUpdater<'a> {
    pub fn new(catalog: &'a dyn ReleaseCatalog, target_version: impl Into<String>) -> Self {
        Self {
            catalog,
            target_version: target_version.into(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            dry_run: false,
        }
    }

    /// Pause inserted after every patch attempt.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every project in configuration order.
    ///
    /// Per-project and per-release failures are printed and recorded in the
    /// report; they never abort the run.
    pub fn run(&self, config: &ProjectConfig) -> UpdateReport {
        let mut report = UpdateReport::new();

        for (slug, labels) in config.iter() {
            println!("{} '{}'", "🔹 Processing project:".cyan().bold(), slug);
            if self.process_project(slug, labels, &mut report) {
                println!("{}", "-".repeat(20).dimmed());
            }
        }

        report
    }

    /// Returns false when the project was abandoned before selection.
    fn process_project(&self, slug: &str, labels: &[String], report: &mut UpdateReport) -> bool {
        let releases = match self.catalog.list_releases(slug) {
            Ok(releases) => releases,
            Err(e) => {
                println!(
                    "   ⟶ {}",
                    format!("❌ Network error while fetching versions for '{slug}': {e}").red()
                );
                report.failed_projects.push(slug.to_string());
                return false;
            }
        };

        if releases.is_empty() {
            println!("   ⟶ {}", format!("No versions published for '{slug}'").dimmed());
            return false;
        }

        let selected = select_releases(&releases, labels);
        if selected.is_empty() {
            println!(
                "   ⟶ {}",
                format!("ℹ️  No matching versions found for '{slug}' from the list: {labels:?}")
                    .yellow()
            );
            report.unmatched_projects.push(slug.to_string());
        }

        for release in selected {
            self.update_release(slug, release, report);
        }

        true
    }

    fn update_release(&self, slug: &str, release: &Release, report: &mut UpdateReport) {
        let target = self.target_version.as_str();

        if release.supports(target) {
            println!(
                "   • Skipping '{}' ({}): {}",
                release.display_name(),
                release.version_number,
                format!("Already supports {target}.").dimmed()
            );
            report.skipped += 1;
            return;
        }

        let after = merge_game_versions(&release.game_versions, target);
        println!(
            "   • Updating '{}' ({}): {} -> {}",
            release.display_name().white().bold(),
            release.version_number,
            format!("{:?}", release.game_versions).red(),
            format!("{after:?}").green()
        );

        let change = ReleaseChange {
            project: slug.to_string(),
            release_id: release.id.clone(),
            version_number: release.version_number.clone(),
            before: release.game_versions.clone(),
            after,
        };

        if self.dry_run {
            println!("      ⟶ {}", "dry run, not sent".dimmed());
            report.planned.push(change);
            return;
        }

        match self.catalog.patch_release(&release.id, &change.after) {
            Ok(()) => report.updated.push(change),
            Err(e) => {
                println!(
                    "      ⟶ {}",
                    format!("❌ Failed to update version {}: {e}", release.id).red()
                );
                report.failed_patches += 1;
            }
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Releases whose `version_number` appears in `labels`, in catalog order.
pub fn select_releases<'r>(releases: &'r [Release], labels: &[String]) -> Vec<&'r Release> {
    releases
        .iter()
        .filter(|r| labels.iter().any(|l| *l == r.version_number))
        .collect()
}
