//! Rescale raw risk scores onto a shared `1.0..=10.0` range.
//!
//! Normalisation is relative to the minimum and maximum of the whole
//! candidate set, so every raw score for a request must be known before any
//! of them is normalised.

/// Lowest normalised score.
pub const MIN_SCORE: f64 = 1.0;
/// Highest normalised score.
pub const MAX_SCORE: f64 = 10.0;

/// Map raw scores onto `1.0..=10.0`, preserving input order.
///
/// Each score becomes `1 + 9 * (raw - min) / (max - min)`, rounded to two
/// decimal places. When fewer than two scores are supplied, or all scores
/// are equal, every output is `1.0`. Non-finite scores take no part in the
/// bounds and normalise to `1.0`.
///
/// # Examples
/// ```
/// use helios_core::normalise_scores;
///
/// assert_eq!(normalise_scores(&[2.0, 5.0, 8.0]), vec![1.0, 5.5, 10.0]);
/// assert_eq!(normalise_scores(&[5.0, 5.0]), vec![1.0, 1.0]);
/// assert!(normalise_scores(&[]).is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "linear rescaling between the observed bounds"
)]
pub fn normalise_scores(raw: &[f64]) -> Vec<f64> {
    let finite = || raw.iter().copied().filter(|score| score.is_finite());
    let min = finite().fold(f64::INFINITY, f64::min);
    let max = finite().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if raw.len() < 2 || !span.is_finite() || span <= 0.0 {
        return vec![MIN_SCORE; raw.len()];
    }
    raw.iter()
        .map(|&score| {
            if !score.is_finite() {
                return MIN_SCORE;
            }
            let scaled = MIN_SCORE + (MAX_SCORE - MIN_SCORE) * (score - min) / span;
            round_to_hundredths(scaled).clamp(MIN_SCORE, MAX_SCORE)
        })
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "decimal rounding")]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
