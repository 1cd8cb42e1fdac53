use crate::error::{Result, UpdaterError};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.modrinth.com/v2";
pub const DEFAULT_CONFIG_FILE: &str = "main.json";
pub const TOKEN_ENV: &str = "MODRINTH_TOKEN";
pub const USER_AGENT: &str = concat!("AutomatedVersionUpdater/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Runtime settings assembled once at startup and handed to the client and driver.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: Url,
    pub token: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub delay: Duration,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Settings {
    /// Build settings from an already-read token value.
    ///
    /// The caller reads the environment; nothing here touches process state.
    pub fn new(api_base: &str, token: Option<String>) -> Result<Self> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(UpdaterError::MissingToken)?;

        Ok(Self {
            api_base: parse_api_base(api_base)?,
            token,
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            dry_run: false,
            verbose: false,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

fn parse_api_base(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| UpdaterError::InvalidApiBase(format!("{raw}: {e}")))?;

    match parsed.scheme() {
        "https" | "http" => {}
        scheme => {
            return Err(UpdaterError::InvalidApiBase(format!(
                "unsupported scheme '{scheme}' in {raw}"
            )));
        }
    }

    if parsed.cannot_be_a_base() {
        return Err(UpdaterError::InvalidApiBase(raw.to_string()));
    }

    Ok(parsed)
}

/// Project slug to the release labels (`version_number`) that should receive the target version.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProjectConfig {
    pub projects: IndexMap<String, Vec<String>>,
}

impl ProjectConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => UpdaterError::ConfigNotFound(path.to_path_buf()),
            _ => UpdaterError::Io(e),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| UpdaterError::ConfigParse {
            path: PathBuf::from(path),
            message: e.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.projects.iter()
    }
}
