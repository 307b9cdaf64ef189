//! UI helpers for CLI display.

use console::{style, Color};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    let line = format!("=== {text} ===");
    if is_color_disabled() {
        println!("{line}");
    } else {
        println!("{}", style(line).bold().cyan());
    }
}

/// Print a warning message on stderr.
pub fn print_warning(text: &str) {
    eprintln!("{} {text}", tag("[WARN]", Color::Yellow));
}

/// Print an error message on stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("[ERROR]", Color::Red));
}

fn tag(label: &str, color: Color) -> String {
    if is_color_disabled() {
        label.to_string()
    } else {
        style(label).fg(color).bold().to_string()
    }
}
