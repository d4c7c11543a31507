//! Success and casualty model for info-gathering operations.

use rand::{Rng, RngCore};

use crate::config::EspionageConfig;

/// Success probability for an actor/target spy ratio quotient.
///
/// The cubic is shared with spell casting and tuned for live balance; keep the
/// coefficients exact. It is not clamped: ratios near zero give a slightly
/// negative rate (never succeeds), large ratios exceed 1.0 (always succeeds).
pub fn success_rate(ratio: f64) -> f64 {
    0.0172 * ratio.powi(3) - 0.1809 * ratio.powi(2) + 0.6767 * ratio - 0.0134
}

/// One uniform trial in `[0, 1)` against `chance`.
pub fn roll(chance: f64, rng: &mut dyn RngCore) -> bool {
    rng.random_range(0.0..1.0) < chance
}

/// Spies captured when an info-gathering operation is caught.
///
/// A base percentage of the actor's spies, reduced by 3 points per 1.0 of
/// forest havens to total land, and the reduction capped at 30%.
pub fn spies_lost(
    spies: u64,
    forest_havens: u64,
    total_land: u64,
    config: &EspionageConfig,
) -> u64 {
    let haven_ratio = if total_land == 0 {
        0.0
    } else {
        forest_havens as f64 / total_land as f64
    };
    let reduction = (haven_ratio * config.forest_haven_casualty_reduction)
        .min(config.forest_haven_casualty_reduction_max);
    let multiplier = 1.0 - reduction;
    let lost = (spies as f64 * (config.spies_lost_percentage / 100.0) * multiplier).ceil() as u64;
    lost.min(spies)
}
