//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every flag is optional; a bare `codeql-perms` checks `.github/workflows`
//!   with the built-in rule
//! - Flags override environment variables, which override the config file

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// codeql-perms - check CodeQL jobs declare `security-events: write` at job level
#[derive(Parser, Debug)]
#[command(name = "codeql-perms")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Exit status is the number of permission errors found (0 when all workflows pass)."
)]
pub struct Cli {
    /// Workflow directory to scan [default: .github/workflows]
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Action reference that marks a job as a CodeQL analyze job
    #[arg(long, value_name = "ID")]
    pub action: Option<String>,

    /// Config file [default: .github/codeql-perms.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Also print GitHub Actions `::error` annotations
    #[arg(long)]
    pub annotations: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply CLI flags on top of an already loaded config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.dir {
            config.workflows.dir = dir.clone();
        }
        if let Some(action) = &self.action {
            config.rule.action = action.clone();
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
        if self.annotations {
            config.output.annotations = true;
        }
        config
    }
}
