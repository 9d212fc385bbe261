//! Formatting utilities for terminal output

/// Bar width used by the tables
pub const BAR_WIDTH: usize = 30;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled against the best score in the table
#[must_use]
pub fn entropy_bar(entropy: f64, best: f64, width: usize) -> String {
    create_progress_bar(entropy, best, width)
}

/// Percentage of `part` in `whole`, 0 for an empty whole
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
