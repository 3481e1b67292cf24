//! Grid configuration for pathkit
//!
//! Read from `config.toml` in the pathkit config directory
//! (`~/.config/pathkit/` or `$PATHKIT_CONFIG_DIR`), or from an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PathkitError, Result};

const CONFIG_DIR: &str = "pathkit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHKIT_CONFIG_DIR";

/// How a character grid is read and traversed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Impassable cell
    pub wall: char,
    /// Start cell (exactly one per grid)
    pub start: char,
    /// Goal cell (at most one per grid)
    pub goal: char,
    /// Plain open cell
    pub open: char,
    /// Allow the four diagonal moves
    pub diagonal: bool,
    /// Expansion cap for A*
    pub step_limit: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            wall: '#',
            start: 'S',
            goal: 'E',
            open: '.',
            diagonal: false,
            step_limit: None,
        }
    }
}

impl GridConfig {
    fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathkitError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// consulted and a missing file yields [`GridConfig::default`].
    #[tracing::instrument(skip(path), fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(e) => {
                        tracing::debug!(error = %e, "no config directory, using defaults");
                        return Ok(Self::default());
                    }
                };
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            PathkitError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            PathkitError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), "loaded grid config");
        Ok(config)
    }

    /// Parse configuration from TOML text, validating the legend.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Legend characters must be distinct and must not be cost digits.
    pub fn validate(&self) -> Result<()> {
        let legend = [
            ("wall", self.wall),
            ("start", self.start),
            ("goal", self.goal),
            ("open", self.open),
        ];
        for (i, (name, c)) in legend.iter().enumerate() {
            if c.is_ascii_digit() {
                return Err(PathkitError::invalid_value(name, c));
            }
            if legend[..i].iter().any(|(_, other)| other == c) {
                return Err(PathkitError::invalid_value(
                    "legend",
                    format!("'{}' is used for more than one cell kind", c),
                ));
            }
        }
        Ok(())
    }
}
