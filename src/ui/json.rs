use std::io::{self, Write};
use std::path::Path;

use codeql_perms::{Diagnostic, ValidationReport, ValidationSink};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Streams validation events as NDJSON.
pub struct JsonReporter<O: Write> {
    out: O,
    verbose: u8,
}

impl<O: Write> JsonReporter<O> {
    pub fn new(out: O, verbose: u8) -> Self {
        Self { out, verbose }
    }

    pub fn start(&mut self, dir: &Path, action: &str) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "start",
                "command": "check",
                "dir": dir.display().to_string(),
                "action": action,
            }),
        );
    }

    pub fn complete(&mut self, report: &ValidationReport) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "files": report.files_checked(),
                "relevant": report.relevant_files().count(),
                "confirmed": report.confirmed_jobs(),
                "errors": report.errors(),
                "success": report.is_success(),
            }),
        );
        let _ = self.out.flush();
    }

    pub fn error(&mut self, message: &str) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "error",
                "command": "check",
                "message": message,
            }),
        );
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> ValidationSink for JsonReporter<O> {
    fn workflow_found(&mut self, file: &Path, jobs: &[String]) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "workflow",
                "file": file.display().to_string(),
                "jobs": jobs,
            }),
        );
    }

    fn job_ok(&mut self, file: &Path, job: &str) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "job_ok",
                "file": file.display().to_string(),
                "job": job,
            }),
        );
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "diagnostic",
                "kind": diagnostic.kind.as_str(),
                "file": diagnostic.file.display().to_string(),
                "job": diagnostic.job,
                "message": diagnostic.message,
                "hint": diagnostic.hint,
            }),
        );
    }

    fn workflow_skipped(&mut self, file: &Path) {
        if self.verbose == 0 {
            return;
        }
        let _ = write_event(
            &mut self.out,
            &serde_json::json!({
                "event": "skipped",
                "file": file.display().to_string(),
            }),
        );
    }
}
