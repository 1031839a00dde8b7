//! Typed view over a parsed GitHub Actions workflow
//!
//! Workflows are parsed into a loose `serde_yaml_ng::Value` tree and then read
//! through accessors that separate "absent", "wrong type" and "present" cases.
//! Only the handful of keys the permission rules need are modelled:
//!
//! ```text
//! permissions: { security-events: write }   # optional, root level
//! jobs:
//!   analyze:
//!     permissions: { security-events: write }
//!     steps:
//!       - uses: github/codeql-action/analyze@v3
//! ```

use serde_yaml_ng::{Mapping, Value};

use crate::error::{ValidateError, ValidateResult};

const JOBS: &str = "jobs";
const PERMISSIONS: &str = "permissions";
const STEPS: &str = "steps";
const USES: &str = "uses";

/// A workflow document that has a top-level `jobs` key.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Mapping,
}

impl WorkflowDocument {
    /// Parse workflow YAML.
    ///
    /// Returns `Ok(None)` for documents that cannot contain jobs: empty files,
    /// non-mapping documents and mappings without a `jobs` key.
    pub fn parse(content: &str) -> ValidateResult<Option<Self>> {
        let value: Value = serde_yaml_ng::from_str(content)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Mapping(root) if root.contains_key(JOBS) => Some(Self { root }),
            _ => None,
        }
    }

    /// Root-level `permissions`.
    pub fn permissions(&self) -> Permissions<'_> {
        Permissions::of(self.root.get(PERMISSIONS))
    }

    /// Jobs in declaration order.
    pub fn jobs(&self) -> ValidateResult<Vec<JobDefinition<'_>>> {
        let jobs = match self.root.get(JOBS) {
            Some(Value::Mapping(jobs)) => jobs,
            Some(other) => {
                return Err(ValidateError::structure(format!(
                    "'jobs' must be a mapping, found {}",
                    kind_name(other)
                )))
            }
            None => return Ok(Vec::new()),
        };

        Ok(jobs
            .iter()
            .map(|(name, body)| JobDefinition {
                name: render_value(name),
                body,
            })
            .collect())
    }
}

/// One entry of the `jobs` mapping.
///
/// The body is kept as a raw value: only jobs that turn out to use the target
/// action need to be well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDefinition<'a> {
    name: String,
    body: &'a Value,
}

impl<'a> JobDefinition<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The job's `steps`.
    ///
    /// A job without steps (e.g. a reusable workflow call) yields an empty
    /// list, as do string or sequence job bodies and string or mapping
    /// `steps`, none of which can hold a step. Scalars where a job body or a
    /// step list must be iterated (null, booleans, numbers) are errors.
    pub fn steps(&self) -> ValidateResult<Vec<StepDefinition<'a>>> {
        let body: &'a Value = self.body;
        let job = match body {
            Value::Mapping(job) => job,
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                return Err(ValidateError::structure(format!(
                    "job '{}' must be a mapping, found {}",
                    self.name,
                    kind_name(body)
                )))
            }
            _ => return Ok(Vec::new()),
        };
        match job.get(STEPS) {
            None => Ok(Vec::new()),
            Some(Value::Sequence(steps)) => Ok(steps.iter().map(StepDefinition::new).collect()),
            Some(other @ (Value::Null | Value::Bool(_) | Value::Number(_))) => {
                Err(ValidateError::structure(format!(
                    "steps of job '{}' must be a sequence, found {}",
                    self.name,
                    kind_name(other)
                )))
            }
            Some(_) => Ok(Vec::new()),
        }
    }

    /// Job-level `permissions`. Absent for non-mapping bodies.
    pub fn permissions(&self) -> Permissions<'a> {
        let body: &'a Value = self.body;
        match body {
            Value::Mapping(job) => Permissions::of(job.get(PERMISSIONS)),
            _ => Permissions::Absent,
        }
    }
}

/// One entry of a job's `steps` sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDefinition<'a> {
    body: &'a Value,
}

impl<'a> StepDefinition<'a> {
    fn new(body: &'a Value) -> Self {
        Self { body }
    }

    /// The raw `uses` value, if this step is a mapping that has one.
    pub fn uses(&self) -> Option<&'a Value> {
        match self.body {
            Value::Mapping(step) => step.get(USES),
            _ => None,
        }
    }
}

/// A `permissions` key as found at workflow or job level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permissions<'a> {
    Absent,
    /// Present but not a mapping, e.g. `read-all` or `null`.
    NotMapping(&'a Value),
    Mapping(&'a Mapping),
}

impl<'a> Permissions<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => Permissions::Absent,
            Some(Value::Mapping(map)) => Permissions::Mapping(map),
            Some(other) => Permissions::NotMapping(other),
        }
    }

    /// Access level granted for `scope`. `None` unless this is a mapping
    /// containing the key.
    pub fn grant(&self, scope: &str) -> Option<&'a Value> {
        match *self {
            Permissions::Mapping(map) => map.get(scope),
            Permissions::Absent | Permissions::NotMapping(_) => None,
        }
    }
}

/// Render a YAML value on one line for messages.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_value(&tagged.value)),
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
