use crate::model::Dominion;

pub trait MilitaryCalculator {
    /// Spies per acre. 0.0 when the dominion has no spies.
    fn spy_ratio(&self, dominion: &Dominion) -> f64;
}

pub struct StandardMilitaryCalculator;

impl MilitaryCalculator for StandardMilitaryCalculator {
    fn spy_ratio(&self, dominion: &Dominion) -> f64 {
        let land = dominion.total_land();
        if dominion.military_spies == 0 || land == 0 {
            return 0.0;
        }
        dominion.military_spies as f64 / land as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LandType;

    #[test]
    fn ratio_is_spies_per_acre() {
        let mut d = Dominion::new(1, "Duskhollow".to_string(), 1, 1);
        d.land.insert(LandType::Plain, 250);
        d.military_spies = 125;
        assert_eq!(StandardMilitaryCalculator.spy_ratio(&d), 0.5);
    }

    #[test]
    fn no_spies_is_exactly_zero() {
        let mut d = Dominion::new(1, "Duskhollow".to_string(), 1, 1);
        d.land.insert(LandType::Plain, 250);
        assert_eq!(StandardMilitaryCalculator.spy_ratio(&d), 0.0);
    }

    #[test]
    fn landless_dominion_is_zero() {
        let mut d = Dominion::new(1, "Duskhollow".to_string(), 1, 1);
        d.military_spies = 40;
        assert_eq!(StandardMilitaryCalculator.spy_ratio(&d), 0.0);
    }
}
