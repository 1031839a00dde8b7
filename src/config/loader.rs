//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ValidateError, ValidateResult};

use super::types::{ColorMode, Config};

/// Config file looked up relative to the project root
pub const DEFAULT_CONFIG_PATH: &str = ".github/codeql-perms.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// The file could not be read or parsed; defaults were used instead.
    Unusable { file: PathBuf, message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "Warning: unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Unusable { file, message } => write!(
                f,
                "Warning: ignoring config {}: {} (using defaults)",
                file.display(),
                message
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ValidateResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ValidateError::Config {
        file: path.to_path_buf(),
        message: e.to_string().trim().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the config file, falling back to defaults.
///
/// `explicit` (from `--config`) replaces the default location. A missing
/// default file is silent; a missing explicit file or a broken file of either
/// kind yields a warning. Environment overrides are applied last.
pub fn load_or_default(
    project_root: &Path,
    explicit: Option<&Path>,
) -> (Config, Vec<ConfigWarning>) {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_root.join(DEFAULT_CONFIG_PATH),
    };

    if explicit.is_none() && !path.exists() {
        return (with_env_overrides(Config::default()), Vec::new());
    }

    match load_with_warnings(&path) {
        Ok((config, warnings)) => (with_env_overrides(config), warnings),
        Err(err) => {
            let message = match err {
                ValidateError::Config { message, .. } => message,
                other => other.to_string(),
            };
            (
                with_env_overrides(Config::default()),
                vec![ConfigWarning::Unusable {
                    file: path,
                    message,
                }],
            )
        }
    }
}

/// Apply environment variable overrides (CODEQL_PERMS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CODEQL_PERMS_DIR
    if let Some(dir) = get_env("CODEQL_PERMS_DIR").filter(|v| !v.is_empty()) {
        config.workflows.dir = PathBuf::from(dir);
    }

    // CODEQL_PERMS_ACTION
    if let Some(action) = get_env("CODEQL_PERMS_ACTION").filter(|v| !v.is_empty()) {
        config.rule.action = action;
    }

    // CODEQL_PERMS_COLOR
    if let Some(color) = get_env("CODEQL_PERMS_COLOR") {
        config.output.color = ColorMode::parse(&color).unwrap_or_default();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "workflows",
        "dir",
        "extensions",
        "rule",
        "action",
        "output",
        "color",
        "annotations",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
