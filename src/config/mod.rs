//! Configuration module for codeql-perms
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CODEQL_PERMS_*)
//! 3. Config file (.github/codeql-perms.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, DEFAULT_CONFIG_PATH,
};
pub use types::{ColorMode, Config, OutputConfig, RuleConfig, WorkflowsConfig};
