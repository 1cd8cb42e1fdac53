use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Please provide the target Minecraft version as an argument.")]
    MissingTargetVersion,

    #[error("MODRINTH_TOKEN environment variable not set.")]
    MissingToken,

    #[error("Configuration file '{}' not found.", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Could not parse '{}'. Please check for JSON errors: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidApiBase(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for UpdaterError {
    fn from(err: reqwest::Error) -> Self {
        UpdaterError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
