//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Show the top `n` letters of a frequency ranking, e.g. `e:4 s:2 k:1`
#[must_use]
pub fn format_ranking(ranking: &[(char, usize)], n: usize) -> String {
    ranking
        .iter()
        .take(n)
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Show up to `n` candidates, noting how many were left out
#[must_use]
pub fn format_candidates(candidates: &[String], n: usize) -> String {
    let shown = candidates
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if candidates.len() > n {
        format!("{shown}, … (+{})", candidates.len() - n)
    } else {
        shown
    }
}
