//! Coursegraph Configuration Module
//!
//! Render settings: diagram title, orientation and output file.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`COURSEGRAPH_TITLE`, `COURSEGRAPH_DIRECTION`, `COURSEGRAPH_OUTPUT`)
//! 3. Config file (`~/.config/coursegraph/config.toml` or `--config PATH`)
//! 4. Defaults

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GraphError, Result};
use crate::util::{DEFAULT_OUTPUT_FILE, DEFAULT_TITLE};

/// Flowchart orientation
///
/// Config files, env vars and CLI flags all parse through `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Top-down (`graph TD`)
    #[default]
    TopDown,
    /// Left-right (`graph LR`)
    LeftRight,
}

impl Direction {
    pub fn as_mermaid(self) -> &'static str {
        match self {
            Self::TopDown => "TD",
            Self::LeftRight => "LR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mermaid())
    }
}

impl FromStr for Direction {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        match raw.to_ascii_uppercase().as_str() {
            "TD" | "TB" => Ok(Self::TopDown),
            "LR" => Ok(Self::LeftRight),
            _ => Err(GraphError::ConfigError {
                reason: format!("unknown direction '{raw}' (expected TD or LR)"),
            }),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_mermaid().to_string()
    }
}

/// Settings for rendering and saving the diagram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Title in the diagram front matter
    pub title: String,

    /// Flowchart orientation
    pub direction: Direction,

    /// File the diagram is written to
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            direction: Direction::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl RenderConfig {
    /// Get the config directory path
    ///
    /// Returns `~/.config/coursegraph/` on Unix, `%APPDATA%/coursegraph/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursegraph")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from the default location.
    ///
    /// Returns defaults if the file doesn't exist, error if it exists but is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::ConfigError {
            reason: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GraphError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Merge with process environment variables
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Merge with variables from `lookup`; non-empty values take precedence.
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(title) = get("COURSEGRAPH_TITLE") {
            self.title = title;
        }
        if let Some(output) = get("COURSEGRAPH_OUTPUT") {
            self.output = PathBuf::from(output);
        }
        if let Some(raw) = get("COURSEGRAPH_DIRECTION") {
            match raw.parse() {
                Ok(direction) => self.direction = direction,
                Err(e) => warn!(error = %e, "ignoring COURSEGRAPH_DIRECTION"),
            }
        }

        self
    }
}
