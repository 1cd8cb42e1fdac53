/// A single game-version change applied (or planned) for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseChange {
    pub project: String,
    pub release_id: String,
    pub version_number: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Tracks the outcome of one update run
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    /// Releases patched successfully
    pub updated: Vec<ReleaseChange>,
    /// Releases that would have been patched in dry-run mode
    pub planned: Vec<ReleaseChange>,
    /// Releases that already supported the target version
    pub skipped: usize,
    /// Patch requests that failed
    pub failed_patches: usize,
    /// Projects whose release list could not be fetched
    pub failed_projects: Vec<String>,
    /// Projects where none of the configured labels matched a release
    pub unmatched_projects: Vec<String>,
}

impl UpdateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_patches > 0 || !self.failed_projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_clean() {
        let report = UpdateReport::new();
        assert_eq!(report.updated_count(), 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn failures_are_detected() {
        let mut report = UpdateReport::new();
        report.failed_projects.push("modA".into());
        assert!(report.has_failures());

        let mut report = UpdateReport::new();
        report.failed_patches = 1;
        assert!(report.has_failures());
    }
}
