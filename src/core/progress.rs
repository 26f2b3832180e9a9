//! Progress aggregation for subject cards.

use crate::core::catalog::LearningContent;

/// Reported for a subject with no content. Chosen over NaN so the value can
/// go straight into a progress bar.
pub const EMPTY_PROGRESS: f32 = 0.0;

/// Arithmetic mean of each item's progress, or `EMPTY_PROGRESS` for an empty list.
pub fn average_progress(content: &[LearningContent]) -> f32 {
    if content.is_empty() {
        return EMPTY_PROGRESS;
    }
    let total: f64 = content.iter().map(|c| f64::from(c.progress())).sum();
    let mean = total / content.len() as f64;
    (mean as f32).clamp(0.0, 1.0)
}

/// Format a fraction as a whole percentage, e.g. `0.4` -> `"40%"`.
pub fn percent_label(progress: f32) -> String {
    let percent = (progress.clamp(0.0, 1.0) * 100.0).round() as u32;
    format!("{percent}%")
}
