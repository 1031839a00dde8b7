//! Check command implementation

use std::io;

use anyhow::Result;

use codeql_perms::config;
use codeql_perms::presentation::Cli;
use codeql_perms::{Validator, ValidatorOptions};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::JsonReporter;
use crate::ui::text::TextReporter;

/// Run the permission check. Returns the process exit status, which is the
/// number of diagnostics found.
///
/// Fatal errors (missing workflow directory) are returned as `Err`.
pub fn cmd_check(cli: &Cli) -> Result<i32> {
    // Use current directory as project root
    let project_root = std::env::current_dir()?;
    let (config, warnings) = config::load_or_default(&project_root, cli.config.as_deref());
    let config = cli.apply_to(config);
    let ui = UiContext::new(cli.json, cli.verbose, &config);

    for warning in &warnings {
        eprint!("{}", crate::ui::error::format_warning(warning, ui.color_err));
        if ui.annotations {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &warning.to_string(),
                    None,
                    None,
                    Some("config")
                )
            );
        }
    }

    let options = ValidatorOptions::from(&config);
    let validator = Validator::new(options);

    if ui.json {
        execute_json(&validator, &ui)
    } else {
        execute_text(&validator, &ui)
    }
}

fn execute_text(validator: &Validator, ui: &UiContext) -> Result<i32> {
    let options = validator.options();
    let mut reporter = TextReporter::new(
        io::stdout().lock(),
        io::stderr().lock(),
        *ui,
        &options.action,
    );

    let report = validator.run(&mut reporter)?;
    reporter.finish(&report, &options.workflows_dir);
    Ok(report.exit_code())
}

fn execute_json(validator: &Validator, ui: &UiContext) -> Result<i32> {
    let options = validator.options();
    let mut reporter = JsonReporter::new(io::stdout().lock(), ui.verbose);
    reporter.start(&options.workflows_dir, &options.action);

    match validator.run(&mut reporter) {
        Ok(report) => {
            reporter.complete(&report);
            Ok(report.exit_code())
        }
        Err(err) => {
            reporter.error(&err.to_string());
            Err(err.into())
        }
    }
}
