use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Series catalog used by `suggest` when `--catalog` is not given.
    pub path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "ongen=info".into(),
        }
    }
}

impl AppConfig {
    /// Load config: the given file, else the user file if it exists, else
    /// the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let user_path = Self::config_path();
                if !user_path.exists() {
                    return Self::parse(DEFAULT_CONFIG);
                }
                user_path
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "ongen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
