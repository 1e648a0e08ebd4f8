use std::path::Path;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::uri::SPOTIFY_TRACK_PREFIX;

pub const DEFAULT_DISCONNECTED_MESSAGE: &str = "Spotify disconnected";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub router: RouterConfig,
    pub journal: JournalConfig,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Current tracks whose URI starts with this get their details fetched.
    pub track_uri_prefix: String,
    pub disconnected_message: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            track_uri_prefix: SPOTIFY_TRACK_PREFIX.to_string(),
            disconnected_message: DEFAULT_DISCONNECTED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct JournalConfig {
    pub path: Option<PathBuf>,
}
