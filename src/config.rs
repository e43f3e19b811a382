use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_PATH, DEFAULT_OUTPUT_FILE_PATH, DEFAULT_TARGETS_FILE_PATH};

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub targets_file_path: PathBuf,
    pub output_file_path: PathBuf,
    pub skip_blank_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets_file_path: PathBuf::from(DEFAULT_TARGETS_FILE_PATH),
            output_file_path: PathBuf::from(DEFAULT_OUTPUT_FILE_PATH),
            skip_blank_lines: false,
        }
    }
}

impl Config {
    pub async fn read_from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let cfg_str = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Falls back to [`Config::default`] when no config file is present.
    pub async fn read_default() -> eyre::Result<Self> {
        if !tokio::fs::try_exists(CONFIG_FILE_PATH).await? {
            tracing::debug!("No config at {CONFIG_FILE_PATH}, using defaults");
            return Ok(Self::default());
        }

        Self::read_from_file(CONFIG_FILE_PATH).await
    }
}
