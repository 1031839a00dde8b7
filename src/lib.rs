//! codeql-perms - CodeQL workflow permission linter
//!
//! Checks GitHub Actions workflows so that every job running
//! `github/codeql-action/analyze` declares `security-events: write` itself,
//! and that the grant is never made at workflow root.

pub mod config;
pub mod discovery;
pub mod error;
pub mod presentation;
pub mod report;
pub mod rules;
pub mod validator;
pub mod workflow;

// Re-exports for convenience
pub use config::{ColorMode, Config};
pub use discovery::discover_workflows;
pub use error::{ValidateError, ValidateResult};
pub use report::{Diagnostic, DiagnosticKind, FileReport, ValidationReport, ValidationSink};
pub use rules::{CODEQL_ANALYZE_ACTION, SECURITY_EVENTS};
pub use validator::{run_validation, run_validation_with_callback, Validator, ValidatorOptions};
pub use workflow::WorkflowDocument;
