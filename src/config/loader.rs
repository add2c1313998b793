use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::RawConfig;

/// Name of the project configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = ".hhconfig";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error in '{path}' at line {line}: expected `key = value`")]
    SyntaxError { path: PathBuf, line: usize },

    #[error("Invalid value for '{key}': expected {expected}, got '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Source of the parsed project configuration for a root.
pub trait ConfigReader {
    fn read(&self, root: &Path) -> Result<RawConfig, ConfigError>;
}

/// Reads `<root>/.hhconfig` as `key = value` lines.
///
/// Blank lines and lines starting with `#` are skipped. The first `=`
/// splits key from value; both sides are trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HhconfigReader;

impl HhconfigReader {
    /// Path of the config file for a project root.
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Parse config text. `path` is used only in error messages.
    pub fn parse(path: &Path, content: &str) -> Result<RawConfig, ConfigError> {
        let mut config = RawConfig::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::SyntaxError {
                    path: path.to_path_buf(),
                    line: index + 1,
                });
            };
            config.insert(key.trim(), value.trim());
        }
        Ok(config)
    }
}

impl ConfigReader for HhconfigReader {
    fn read(&self, root: &Path) -> Result<RawConfig, ConfigError> {
        let path = Self::config_path(root);
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&path, &content)
    }
}
