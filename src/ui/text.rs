//! Line-oriented text output
//!
//! Informational lines go to stdout, diagnostics to stderr, each written the
//! moment the validator reports it.

use std::io::Write;
use std::path::Path;

use codeql_perms::{Diagnostic, ValidationReport, ValidationSink, SECURITY_EVENTS};

use crate::ui::ci::diagnostic_annotation;
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, labels, paint};

pub struct TextReporter<O: Write, E: Write> {
    out: O,
    err: E,
    ui: UiContext,
    action: String,
}

impl<O: Write, E: Write> TextReporter<O, E> {
    pub fn new(out: O, err: E, ui: UiContext, action: &str) -> Self {
        Self {
            out,
            err,
            ui,
            action: action.to_string(),
        }
    }

    fn ok_label(&self) -> String {
        paint(labels::OK, colors::SUCCESS, self.ui.color_out)
    }

    fn error_label(&self) -> String {
        paint(labels::ERROR, colors::ERROR, self.ui.color_err)
    }

    /// Final summary line, plus a file count at `-v`.
    pub fn finish(&mut self, report: &ValidationReport, dir: &Path) {
        if self.ui.verbose > 0 {
            let _ = writeln!(
                self.out,
                "Checked {} workflow file(s) in {}",
                report.files_checked(),
                dir.display()
            );
        }

        if report.is_success() {
            let _ = writeln!(
                self.out,
                "{} All CodeQL workflows have correct permissions configuration",
                self.ok_label()
            );
        } else {
            let _ = writeln!(
                self.err,
                "{} Found {} permission configuration errors",
                self.error_label(),
                report.errors()
            );
        }

        let _ = self.out.flush();
        let _ = self.err.flush();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ValidationSink for TextReporter<O, E> {
    fn workflow_found(&mut self, file: &Path, jobs: &[String]) {
        let _ = writeln!(self.out, "Found CodeQL analyze workflow: {}", file.display());
        let _ = writeln!(self.out, "  Jobs using {}: {}", self.action, jobs.join(", "));
    }

    fn job_ok(&mut self, _file: &Path, job: &str) {
        let _ = writeln!(
            self.out,
            "  {} Job '{}' has correct {}: write permission",
            self.ok_label(),
            job,
            SECURITY_EVENTS
        );
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(self.err, "{}: {}", self.error_label(), diagnostic.message);
        if let Some(hint) = &diagnostic.hint {
            let _ = writeln!(self.err, "  {}", hint);
        }
        if self.ui.annotations {
            let _ = writeln!(self.out, "{}", diagnostic_annotation(diagnostic));
        }
    }

    fn workflow_skipped(&mut self, file: &Path) {
        if self.ui.verbose == 0 {
            return;
        }
        let line = format!("  skip {}: no job uses {}", file.display(), self.action);
        let _ = writeln!(self.out, "{}", paint(&line, colors::DIM, self.ui.color_out));
    }
}
