//! Project configuration for the sync surface.
//!
//! A TOML document naming the project and its credentials, searched at the
//! project-local path first and the XDG config directory second. The
//! endpoint is the only defaulted field; everything the remote service
//! requires is explicit.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Endpoint the sync document targets when the config names none.
pub const DEFAULT_ENDPOINT: &str = "https://api.act-sdk.dev";

/// Project-local configuration file name.
const LOCAL_CONFIG_NAME: &str = "actkit.toml";

/// File name within the XDG config directory.
const XDG_CONFIG_NAME: &str = "config.toml";

/// Application name for XDG directory lookup.
const APP_NAME: &str = "actkit";

/// Errors from locating, reading, or parsing configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No configuration file exists at any searched path.
    #[error("no configuration file found (searched {searched:?})")]
    NotFound {
        /// Every path that was checked, in search order.
        searched: Vec<PathBuf>,
    },

    /// A file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not a valid configuration document.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns `true` when no configuration file was found at all —
    /// distinct from a file that exists but is broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

/// Project configuration consumed by the sync export.
///
/// ```toml
/// api_key = "sk-demo"
/// project_id = "demo-project"
/// description = "Calculator app exposing AI-callable arithmetic actions"
/// endpoint = "https://api.act-sdk.dev"   # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActConfig {
    /// API key presented to the remote service.
    pub api_key: String,
    /// Project the manifest belongs to.
    pub project_id: String,
    /// Project-level description sent alongside the manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remote endpoint; [`DEFAULT_ENDPOINT`] when absent.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl ActConfig {
    /// Load from the default search paths, relative to the current
    /// directory: `./actkit.toml`, then `~/.config/actkit/config.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir(Path::new("."))
    }

    /// Load from the search paths rooted at `dir`.
    ///
    /// The project-local file always beats the XDG fallback. When neither
    /// exists the error is [`ConfigError::NotFound`] naming every path
    /// that was checked.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let searched = Self::search_paths(dir);
        for path in &searched {
            if path.exists() {
                return Self::from_path(path);
            }
        }
        Err(ConfigError::NotFound { searched })
    }

    /// The paths [`load_from_dir`](Self::load_from_dir) checks, in order.
    pub fn search_paths(dir: &Path) -> Vec<PathBuf> {
        let mut paths = vec![dir.join(LOCAL_CONFIG_NAME)];
        if let Some(xdg) = Self::xdg_config_path() {
            paths.push(xdg);
        }
        paths
    }

    /// The XDG fallback path, `~/.config/actkit/config.toml` on most
    /// systems. `None` when the platform has no config directory.
    pub fn xdg_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(XDG_CONFIG_NAME))
    }

    /// Load a specific file.
    ///
    /// A missing file is [`ConfigError::NotFound`]; an unreadable one is
    /// [`ConfigError::Io`]; an unparseable one is [`ConfigError::Parse`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    searched: vec![path.to_path_buf()],
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        contents.parse().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromStr for ActConfig {
    type Err = toml::de::Error;

    fn from_str(document: &str) -> Result<Self, Self::Err> {
        toml::from_str(document)
    }
}
