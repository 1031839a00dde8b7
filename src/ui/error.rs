use codeql_perms::config::ConfigWarning;

use crate::ui::theme::{colors, labels, paint};

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.stderr_tty && caps.supports_color && !caps.is_ci)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool) -> String {
    format!(
        "{}: {}\n",
        paint(labels::ERROR, colors::ERROR, supports_color),
        err
    )
}

pub fn format_warning(warning: &ConfigWarning, supports_color: bool) -> String {
    let text = warning.to_string();
    match text.strip_prefix("Warning:") {
        Some(rest) => format!("{}:{}\n", paint("Warning", colors::WARNING, supports_color), rest),
        None => format!("{}\n", text),
    }
}
