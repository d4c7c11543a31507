use crate::model::{Dominion, ImprovementType};

pub trait ImprovementCalculator {
    /// Multiplier bonus an improvement currently grants (0.05 = +5%).
    fn multiplier_bonus(&self, dominion: &Dominion, improvement_type: ImprovementType) -> f64;
}

/// Diminishing returns: `max × (1 − e^(−points / (coefficient × land + 15000)))`,
/// rounded to 4 decimals.
pub struct StandardImprovementCalculator;

const LAND_INDEPENDENT_DIVISOR: f64 = 15000.0;

impl StandardImprovementCalculator {
    pub fn maximum(improvement_type: ImprovementType) -> f64 {
        match improvement_type {
            ImprovementType::Science => 0.20,
            ImprovementType::Keep => 0.30,
            ImprovementType::Towers => 0.60,
            ImprovementType::Forges => 0.30,
            ImprovementType::Walls => 0.20,
            ImprovementType::Harbor => 0.60,
        }
    }

    pub fn coefficient(improvement_type: ImprovementType) -> f64 {
        match improvement_type {
            ImprovementType::Science | ImprovementType::Keep => 4000.0,
            ImprovementType::Towers | ImprovementType::Harbor => 5000.0,
            ImprovementType::Forges | ImprovementType::Walls => 7500.0,
        }
    }
}

impl ImprovementCalculator for StandardImprovementCalculator {
    fn multiplier_bonus(&self, dominion: &Dominion, improvement_type: ImprovementType) -> f64 {
        let points = dominion.improvement(improvement_type) as f64;
        let divisor = Self::coefficient(improvement_type) * dominion.total_land() as f64
            + LAND_INDEPENDENT_DIVISOR;
        let bonus = Self::maximum(improvement_type) * (1.0 - (-points / divisor).exp());
        (bonus * 10_000.0).round() / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LandType;

    fn dominion_with(points: u64) -> Dominion {
        let mut d = Dominion::new(1, "Ravenmoor".to_string(), 1, 1);
        d.land.insert(LandType::Plain, 250);
        d.improvements.insert(ImprovementType::Science, points);
        d
    }

    #[test]
    fn no_points_no_bonus() {
        let d = dominion_with(0);
        assert_eq!(
            StandardImprovementCalculator.multiplier_bonus(&d, ImprovementType::Science),
            0.0
        );
    }

    #[test]
    fn bonus_matches_formula() {
        let d = dominion_with(100_000);
        // 0.2 * (1 - e^(-100000 / 1015000)) = 0.018766...
        assert_eq!(
            StandardImprovementCalculator.multiplier_bonus(&d, ImprovementType::Science),
            0.0188
        );
    }

    #[test]
    fn bonus_approaches_maximum() {
        let d = dominion_with(u64::from(u32::MAX));
        let bonus = StandardImprovementCalculator.multiplier_bonus(&d, ImprovementType::Science);
        assert_eq!(bonus, 0.2);
    }
}
