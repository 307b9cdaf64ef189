//! CLI output formatting.

use std::time::Duration;

use pidigit_core::digits::DigitContext;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a context window with the requested digit in brackets.
///
/// A window starting at the first decimal is prefixed with `3.`, any other
/// window with an ellipsis.
#[must_use]
pub fn format_context(context: &DigitContext) -> String {
    let prefix = if context.at_start() { "3." } else { "..." };
    let digit = &context.digits[context.focus..=context.focus];
    format!(
        "{prefix}{}[{digit}]{}...",
        context.before(),
        context.after()
    )
}
