//! Rounding, banding, and roll-up arithmetic shared by the detectors.
//!
//! The two banding helpers are the only score formulas in the engine:
//! ratio-driven behaviors map through `ratio_score`, count-driven ones
//! through `count_score` with detector-specific base/step constants.

use super::domain::ComponentResult;

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map a 0..=1 ratio onto the 1..=5 band: `round(1 + 4r)`, clamped.
pub(crate) fn ratio_score(ratio: f64) -> f64 {
    (1.0 + ratio * 4.0).round().clamp(1.0, 5.0)
}

/// Map a match count onto the 1..=5 band: `min(5, round(base + step·n))`.
pub(crate) fn count_score(base: f64, step: f64, count: usize) -> f64 {
    (base + step * count as f64).round().min(5.0)
}

/// Unweighted mean over applicable components; `None` when nothing
/// applies. Inapplicable components contribute nothing.
pub fn average_applicable(components: &[ComponentResult]) -> Option<f64> {
    let scores: Vec<f64> = components
        .iter()
        .filter_map(ComponentResult::score)
        .collect();
    if scores.is_empty() {
        return None;
    }

    Some(round1(scores.iter().sum::<f64>() / scores.len() as f64))
}

/// Weighted mean over applicable components. Weights of inapplicable
/// components leave both numerator and denominator, so the remaining
/// weights renormalize implicitly. `None` when nothing applies.
pub fn weighted_average_applicable(components: &[ComponentResult]) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for component in components {
        if let Some(score) = component.score() {
            weighted_sum += score * component.weight;
            weight_total += component.weight;
        }
    }

    if weight_total == 0.0 {
        return None;
    }

    Some(round1(weighted_sum / weight_total))
}
