//! codeql-perms CLI - CodeQL workflow permission linter
//!
//! Usage: codeql-perms [OPTIONS]
//!
//! Scans `.github/workflows` for jobs running `github/codeql-action/analyze`
//! and checks where `security-events: write` is granted. The exit status is
//! the number of errors found.

mod commands;
mod ui;

use clap::Parser;

use codeql_perms::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    let code = match commands::cmd_check(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", ui::error::format_error(&err));
            1
        }
    };

    std::process::exit(code);
}
