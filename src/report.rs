//! Diagnostics and run reports

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ValidateError;

/// Kind of a recorded rule violation or processing failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    ParseError,
    RootPermissionViolation,
    JobPermissionMissing,
    JobPermissionWrongValue,
    JobPermissionMalformed,
    UnexpectedProcessingError,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::ParseError => "parse-error",
            DiagnosticKind::RootPermissionViolation => "root-permission-violation",
            DiagnosticKind::JobPermissionMissing => "job-permission-missing",
            DiagnosticKind::JobPermissionWrongValue => "job-permission-wrong-value",
            DiagnosticKind::JobPermissionMalformed => "job-permission-malformed",
            DiagnosticKind::UnexpectedProcessingError => "unexpected-processing-error",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error record. Each diagnostic adds one to the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub job: Option<String>,
    pub kind: DiagnosticKind,
    /// Human readable text, already naming the file (and job when set).
    pub message: String,
    /// Follow-up line printed under the message.
    pub hint: Option<String>,
}

impl Diagnostic {
    fn new(file: &Path, job: Option<&str>, kind: DiagnosticKind, message: String) -> Self {
        Self {
            file: file.to_path_buf(),
            job: job.map(String::from),
            kind,
            message,
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn parse_error(file: &Path, err: &ValidateError) -> Self {
        Self::new(
            file,
            None,
            DiagnosticKind::ParseError,
            format!("Failed to parse {}: {}", file.display(), err),
        )
    }

    pub fn processing_error(file: &Path, err: &ValidateError) -> Self {
        Self::new(
            file,
            None,
            DiagnosticKind::UnexpectedProcessingError,
            format!("Failed to process {}: {}", file.display(), err),
        )
    }

    pub fn root_write(file: &Path, scope: &str) -> Self {
        Self::new(
            file,
            None,
            DiagnosticKind::RootPermissionViolation,
            format!("{} has {}: write at root level", file.display(), scope),
        )
        .with_hint(format!(
            "Root-level {}: write should be moved to job level",
            scope
        ))
    }

    pub fn job_malformed(file: &Path, job: &str) -> Self {
        Self::new(
            file,
            Some(job),
            DiagnosticKind::JobPermissionMalformed,
            format!(
                "{} job '{}' has invalid permissions format",
                file.display(),
                job
            ),
        )
    }

    pub fn job_missing(file: &Path, job: &str, scope: &str) -> Self {
        Self::new(
            file,
            Some(job),
            DiagnosticKind::JobPermissionMissing,
            format!(
                "{} job '{}' missing {} permission",
                file.display(),
                job,
                scope
            ),
        )
    }

    pub fn job_wrong_value(file: &Path, job: &str, scope: &str, found: &str) -> Self {
        Self::new(
            file,
            Some(job),
            DiagnosticKind::JobPermissionWrongValue,
            format!(
                "{} job '{}' has {}: {}, should be 'write'",
                file.display(),
                job,
                scope,
                found
            ),
        )
    }
}

/// Receives validation events as they happen.
///
/// Diagnostics are pushed the moment they are found so long runs can be read
/// incrementally.
pub trait ValidationSink {
    /// A workflow with at least one job using the target action.
    fn workflow_found(&mut self, file: &Path, jobs: &[String]);

    /// A relevant job declares the permission correctly.
    fn job_ok(&mut self, file: &Path, job: &str);

    fn diagnostic(&mut self, diagnostic: &Diagnostic);

    /// A workflow with no relevant jobs. Silent by default.
    fn workflow_skipped(&mut self, _file: &Path) {}
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ValidationSink for NullSink {
    fn workflow_found(&mut self, _file: &Path, _jobs: &[String]) {}

    fn job_ok(&mut self, _file: &Path, _job: &str) {}

    fn diagnostic(&mut self, _diagnostic: &Diagnostic) {}
}

/// Outcome of checking one workflow file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub file: PathBuf,
    pub relevant_jobs: Vec<String>,
    pub confirmed_jobs: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_relevant(&self) -> bool {
        !self.relevant_jobs.is_empty()
    }
}

/// Aggregate result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    pub fn relevant_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_relevant())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|f| f.diagnostics.iter())
    }

    pub fn confirmed_jobs(&self) -> usize {
        self.files.iter().map(|f| f.confirmed_jobs.len()).sum()
    }

    pub fn errors(&self) -> usize {
        self.files.iter().map(FileReport::errors).sum()
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    /// Process exit status: the error count, saturated to `i32`.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.errors()).unwrap_or(i32::MAX)
    }
}
