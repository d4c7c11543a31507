use crate::config::EspionageConfig;
use crate::model::Dominion;

pub trait RangeCalculator {
    fn is_in_range(&self, dominion: &Dominion, target: &Dominion) -> bool;
}

/// A target is in range when its land lies within a band around the actor's land.
pub struct LandRangeCalculator {
    min_ratio: f64,
    max_ratio: f64,
}

impl LandRangeCalculator {
    pub fn new(min_ratio: f64, max_ratio: f64) -> Self {
        Self {
            min_ratio,
            max_ratio,
        }
    }

    pub fn from_config(config: &EspionageConfig) -> Self {
        Self::new(config.range_min_ratio, config.range_max_ratio)
    }
}

impl RangeCalculator for LandRangeCalculator {
    fn is_in_range(&self, dominion: &Dominion, target: &Dominion) -> bool {
        let self_land = dominion.total_land() as f64;
        let target_land = target.total_land() as f64;
        target_land >= self_land * self.min_ratio && target_land <= self_land * self.max_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LandType;

    fn with_land(id: u64, acres: u64) -> Dominion {
        let mut d = Dominion::new(id, format!("D{id}"), id, 1);
        d.land.insert(LandType::Hill, acres);
        d
    }

    #[test]
    fn band_edges_are_inclusive() {
        let range = LandRangeCalculator::from_config(&EspionageConfig::default());
        let me = with_land(1, 300);
        assert!(range.is_in_range(&me, &with_land(2, 225)));
        assert!(range.is_in_range(&me, &with_land(2, 399)));
        assert!(!range.is_in_range(&me, &with_land(2, 224)));
        assert!(!range.is_in_range(&me, &with_land(2, 401)));
    }

    #[test]
    fn band_is_relative_to_the_actor() {
        let range = LandRangeCalculator::new(0.75, 4.0 / 3.0);
        let small = with_land(1, 300);
        let big = with_land(2, 390);
        assert!(range.is_in_range(&small, &big));
        assert!(range.is_in_range(&big, &small));
        let huge = with_land(3, 1000);
        assert!(!range.is_in_range(&small, &huge));
        assert!(!range.is_in_range(&huge, &small));
    }
}
