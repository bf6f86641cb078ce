//! Coloured terminal output shared by the commands.

use clap::ValueEnum;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colour when stderr is a terminal
    Auto,
    Always,
    Never,
}

/// Resolve `ColorChoice` from the `--color` flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(mode: ColorMode) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Auto => ColorChoice::Auto,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    }
}

/// Print `message` to stderr in red.
pub fn print_error(choice: ColorChoice, message: &str) {
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(stderr, "{}", message);
    let _ = stderr.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_is_respected() {
        assert_eq!(resolve_color_choice(ColorMode::Never), ColorChoice::Never);
    }
}
