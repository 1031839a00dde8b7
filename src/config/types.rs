//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::discovery::DEFAULT_EXTENSIONS;
use crate::rules::CODEQL_ANALYZE_ACTION;

/// Where workflow files are looked up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowsConfig {
    #[serde(default = "default_workflows_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            dir: default_workflows_dir(),
            extensions: default_extensions(),
        }
    }
}

fn default_workflows_dir() -> PathBuf {
    PathBuf::from(".github/workflows")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// Which action makes a job subject to the permission rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_action")]
    pub action: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            action: default_action(),
        }
    }
}

fn default_action() -> String {
    CODEQL_ANALYZE_ACTION.to_string()
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Also print GitHub Actions `::error` workflow commands
    #[serde(default)]
    pub annotations: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workflows: WorkflowsConfig,

    #[serde(default)]
    pub rule: RuleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
