//! Terminal styling and text wrapping for the interactive prompt layer.
//!
//! Colour capability is detected once per process and cached — spec.md §5's
//! "only shared mutable state" — rather than re-probed on every prompt.

use owo_colors::OwoColorize;
use std::sync::OnceLock;

static COLOR_CAPABLE: OnceLock<bool> = OnceLock::new();

/// Whether stdout looks like an interactive, colour-capable terminal.
/// `NO_COLOR` (https://no-color.org) always disables colour.
fn color_capable() -> bool {
    *COLOR_CAPABLE.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::IsTerminal::is_terminal(&std::io::stdout())
    })
}

/// Style text as an error/warning heading if the terminal supports it.
pub fn warn(text: &str) -> String {
    if color_capable() {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Style text as an emphasised result (e.g. the best CRF) if supported.
pub fn emphasize(text: &str) -> String {
    if color_capable() {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Wrap `text` to the terminal width (falling back to 80 columns when the
/// width can't be determined, e.g. when piped).
pub fn wrap(text: &str) -> String {
    let width = textwrap::termwidth().max(40);
    textwrap::fill(text, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_never_panics_on_empty() {
        assert_eq!(wrap(""), "");
    }
}
