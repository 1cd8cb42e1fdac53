use crate::error::Result;
use serde::Deserialize;

/// A published release of a project as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Release label, matched against the configured labels.
    pub version_number: String,
    /// Game versions this release currently declares support for.
    pub game_versions: Vec<String>,
}

impl Release {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.version_number)
    }

    pub fn supports(&self, game_version: &str) -> bool {
        self.game_versions.iter().any(|v| v == game_version)
    }
}

/// Remote catalog operations the update driver depends on.
pub trait ReleaseCatalog {
    /// All releases of the project identified by `slug`.
    fn list_releases(&self, slug: &str) -> Result<Vec<Release>>;

    /// Replace the supported game versions of one release.
    fn patch_release(&self, release_id: &str, game_versions: &[String]) -> Result<()>;
}
