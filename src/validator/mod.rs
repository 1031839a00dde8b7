//! Workflow permission validator
//!
//! Runs discovery, parsing and both permission rules over every workflow
//! file. Failures are local to a file: they become diagnostics and the run
//! moves on. Only a missing workflow directory aborts the run.


use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery::{discover_workflows, DEFAULT_EXTENSIONS};
use crate::error::{ValidateError, ValidateResult};
use crate::report::{Diagnostic, FileReport, NullSink, ValidationReport, ValidationSink};
use crate::rules::{
    check_job_permissions, check_root_permissions, find_relevant_jobs, JobVerdict, RootVerdict,
    CODEQL_ANALYZE_ACTION, SECURITY_EVENTS,
};
use crate::workflow::WorkflowDocument;

/// Options for a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub workflows_dir: PathBuf,
    pub extensions: Vec<String>,
    /// Substring identifying the action that makes a job relevant
    pub action: String,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            workflows_dir: PathBuf::from(".github/workflows"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            action: CODEQL_ANALYZE_ACTION.to_string(),
        }
    }
}

impl From<&Config> for ValidatorOptions {
    fn from(config: &Config) -> Self {
        Self {
            workflows_dir: config.workflows.dir.clone(),
            extensions: config.workflows.extensions.clone(),
            action: config.rule.action.clone(),
        }
    }
}

pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Check every workflow file, streaming events into `sink`.
    ///
    /// Returns `ValidateError::DirectoryMissing` before touching any file if
    /// the workflow directory does not exist.
    pub fn run(&self, sink: &mut impl ValidationSink) -> ValidateResult<ValidationReport> {
        let files = discover_workflows(&self.options.workflows_dir, &self.options.extensions)?;

        let mut report = ValidationReport::new();
        for file in &files {
            report.push(self.validate_file(file, sink));
        }
        Ok(report)
    }

    /// Read and check a single workflow file.
    pub fn validate_file(&self, path: &Path, sink: &mut impl ValidationSink) -> FileReport {
        match fs::read_to_string(path) {
            Ok(content) => self.validate_source(path, &content, sink),
            Err(err) => {
                let mut report = FileReport::new(path);
                let err = ValidateError::from(err);
                record(&mut report, sink, Diagnostic::processing_error(path, &err));
                report
            }
        }
    }

    /// Check workflow text as if it had been read from `path`.
    pub fn validate_source(
        &self,
        path: &Path,
        content: &str,
        sink: &mut impl ValidationSink,
    ) -> FileReport {
        let mut report = FileReport::new(path);

        let document = match WorkflowDocument::parse(content) {
            Ok(Some(document)) => document,
            Ok(None) => {
                sink.workflow_skipped(path);
                return report;
            }
            Err(err) => {
                record(&mut report, sink, Diagnostic::parse_error(path, &err));
                return report;
            }
        };

        let jobs = match document.jobs() {
            Ok(jobs) => jobs,
            Err(err) => {
                record(&mut report, sink, Diagnostic::processing_error(path, &err));
                return report;
            }
        };

        let scan = find_relevant_jobs(&jobs, &self.options.action);
        for err in &scan.failures {
            record(&mut report, sink, Diagnostic::processing_error(path, err));
        }

        let relevant = scan.relevant;
        if relevant.is_empty() {
            if scan.failures.is_empty() {
                sink.workflow_skipped(path);
            }
            return report;
        }

        report.relevant_jobs = relevant.iter().map(|job| job.name().to_string()).collect();
        sink.workflow_found(path, &report.relevant_jobs);

        if check_root_permissions(&document.permissions()) == RootVerdict::WriteAtRoot {
            record(&mut report, sink, Diagnostic::root_write(path, SECURITY_EVENTS));
        }

        for job in relevant {
            let name = job.name();
            match check_job_permissions(&job.permissions()) {
                JobVerdict::Granted => {
                    sink.job_ok(path, name);
                    report.confirmed_jobs.push(name.to_string());
                }
                JobVerdict::Malformed => {
                    record(&mut report, sink, Diagnostic::job_malformed(path, name));
                }
                JobVerdict::Missing => {
                    record(
                        &mut report,
                        sink,
                        Diagnostic::job_missing(path, name, SECURITY_EVENTS),
                    );
                }
                JobVerdict::WrongValue(found) => {
                    record(
                        &mut report,
                        sink,
                        Diagnostic::job_wrong_value(path, name, SECURITY_EVENTS, &found),
                    );
                }
            }
        }

        report
    }
}

fn record(report: &mut FileReport, sink: &mut impl ValidationSink, diagnostic: Diagnostic) {
    sink.diagnostic(&diagnostic);
    report.diagnostics.push(diagnostic);
}

/// Run a validation without observing events.
pub fn run_validation(options: ValidatorOptions) -> ValidateResult<ValidationReport> {
    Validator::new(options).run(&mut NullSink)
}

/// Run a validation, calling `on_diagnostic` for each diagnostic as found.
pub fn run_validation_with_callback(
    options: ValidatorOptions,
    on_diagnostic: impl FnMut(&Diagnostic),
) -> ValidateResult<ValidationReport> {
    struct CallbackSink<F> {
        on_diagnostic: F,
    }

    impl<F: FnMut(&Diagnostic)> ValidationSink for CallbackSink<F> {
        fn workflow_found(&mut self, _file: &Path, _jobs: &[String]) {}

        fn job_ok(&mut self, _file: &Path, _job: &str) {}

        fn diagnostic(&mut self, diagnostic: &Diagnostic) {
            (self.on_diagnostic)(diagnostic);
        }
    }

    Validator::new(options).run(&mut CallbackSink { on_diagnostic })
}
