//! Permission placement rules for CodeQL analyze jobs
//!
//! A job is relevant when one of its steps `uses` the target action. For files
//! with relevant jobs two rules apply:
//! - the workflow root must not grant `security-events: write`
//! - every relevant job must grant `security-events: write` itself

use serde_yaml_ng::Value;

use crate::error::{ValidateError, ValidateResult};
use crate::workflow::{kind_name, render_value, JobDefinition, Permissions};

/// Action whose jobs need `security-events: write`
pub const CODEQL_ANALYZE_ACTION: &str = "github/codeql-action/analyze";

/// Permission scope checked by both rules
pub const SECURITY_EVENTS: &str = "security-events";

const WRITE: &str = "write";

/// Outcome of scanning every job for the target action
#[derive(Debug, Default)]
pub struct JobScan<'j, 'a> {
    /// Jobs using the action, in declaration order
    pub relevant: Vec<&'j JobDefinition<'a>>,
    /// One error per job whose shape stopped the scan of that job
    pub failures: Vec<ValidateError>,
}

/// Scan jobs one at a time for a step whose `uses` references `action`.
///
/// A job that cannot be scanned is recorded in `failures` and treated as not
/// relevant; the remaining jobs are still scanned.
pub fn find_relevant_jobs<'j, 'a>(
    jobs: &'j [JobDefinition<'a>],
    action: &str,
) -> JobScan<'j, 'a> {
    let mut scan = JobScan::default();
    for job in jobs {
        match job_uses_action(job, action) {
            Ok(true) => scan.relevant.push(job),
            Ok(false) => {}
            Err(err) => scan.failures.push(err),
        }
    }
    scan
}

/// Whether one of the job's steps references `action`. Stops at the first
/// matching step.
pub fn job_uses_action(job: &JobDefinition<'_>, action: &str) -> ValidateResult<bool> {
    for step in job.steps()? {
        let Some(uses) = step.uses() else {
            continue;
        };
        if uses_matches(uses, action).map_err(|err| in_job(job, err))? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// A string `uses` matches by containment; a list or mapping matches when it
/// holds `action` as an element or key.
fn uses_matches(uses: &Value, action: &str) -> ValidateResult<bool> {
    match uses {
        Value::String(uses) => Ok(uses.contains(action)),
        Value::Sequence(items) => Ok(items.iter().any(|item| item.as_str() == Some(action))),
        Value::Mapping(map) => Ok(map.contains_key(action)),
        Value::Tagged(_) => Ok(false),
        other => Err(ValidateError::structure(format!(
            "step 'uses' must be a string, found {}",
            kind_name(other)
        ))),
    }
}

fn in_job(job: &JobDefinition<'_>, err: ValidateError) -> ValidateError {
    ValidateError::structure(format!("job '{}': {}", job.name(), err))
}

/// Result of the root-level rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootVerdict {
    Pass,
    WriteAtRoot,
}

/// Only the exact value `write` is rejected at root.
pub fn check_root_permissions(permissions: &Permissions<'_>) -> RootVerdict {
    match permissions.grant(SECURITY_EVENTS).and_then(|v| v.as_str()) {
        Some(WRITE) => RootVerdict::WriteAtRoot,
        _ => RootVerdict::Pass,
    }
}

/// Result of the job-level rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobVerdict {
    Granted,
    /// `permissions` is present but not a mapping.
    Malformed,
    /// No `permissions`, or a mapping without `security-events`.
    Missing,
    /// `security-events` set to something other than `write`; holds the
    /// rendered value.
    WrongValue(String),
}

pub fn check_job_permissions(permissions: &Permissions<'_>) -> JobVerdict {
    if let Permissions::NotMapping(_) = permissions {
        return JobVerdict::Malformed;
    }
    match permissions.grant(SECURITY_EVENTS) {
        None => JobVerdict::Missing,
        Some(value) if value.as_str() == Some(WRITE) => JobVerdict::Granted,
        Some(value) => JobVerdict::WrongValue(render_value(value)),
    }
}
