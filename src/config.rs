use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Settings used for the first initialization of the shared logger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Identifying name, also used as the log target
    pub name: String,
    /// Whether output is emitted right after creation
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            name: "colorful-logger".to_string(),
            enabled: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Invalid logger configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}
