use crossterm::style::{Color, Stylize};

/// Design tokens for the CLI output.
///
/// Only the status labels are colored; message text stays plain so it reads
/// the same in logs.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod labels {
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
}

pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.with(color).bold())
}
