use serde::Deserialize;

/// Balance constants for espionage resolution.
///
/// Defaults match live game balance. Deserializes with every field optional, so
/// a JSON override only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EspionageConfig {
    /// Spy strength (0–100) required before any operation may be attempted.
    pub min_spy_strength: u32,
    /// Spy strength spent by every resolved info-gathering attempt.
    pub info_op_spy_strength_cost: u32,
    /// Percentage of spies captured on a failed info-gathering attempt.
    pub spies_lost_percentage: f64,
    /// Casualty reduction per 1.0 of forest havens / total land, as a fraction.
    pub forest_haven_casualty_reduction: f64,
    /// Cap on the forest haven casualty reduction, as a fraction.
    pub forest_haven_casualty_reduction_max: f64,
    /// Accuracy of partially observed quantities (0.85 = within 15%).
    pub info_op_accuracy: f64,
    /// Hour buckets, starting at 0, covered by the land spy incoming projection.
    pub incoming_land_hours: u32,
    /// Smallest target size, relative to the actor's land, that is in range.
    pub range_min_ratio: f64,
    /// Largest target size, relative to the actor's land, that is in range.
    pub range_max_ratio: f64,
}

impl Default for EspionageConfig {
    fn default() -> Self {
        Self {
            min_spy_strength: 30,
            info_op_spy_strength_cost: 2,
            spies_lost_percentage: 2.0,
            forest_haven_casualty_reduction: 3.0,
            forest_haven_casualty_reduction_max: 0.30,
            info_op_accuracy: 0.85,
            incoming_land_hours: 12,
            range_min_ratio: 0.75,
            range_max_ratio: 4.0 / 3.0,
        }
    }
}
