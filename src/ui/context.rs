use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use codeql_perms::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    /// Color on stdout
    pub color_out: bool,
    /// Color on stderr
    pub color_err: bool,
    pub annotations: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color_for = |tty: bool| {
            if json {
                return false;
            }
            match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => tty && caps.supports_color && !caps.is_ci,
            }
        };

        Self {
            json,
            verbose,
            color_out: color_for(caps.stdout_tty),
            color_err: color_for(caps.stderr_tty),
            annotations: !json && config.output.annotations,
        }
    }
}
