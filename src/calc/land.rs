use crate::model::queue::queued_total;
use crate::model::{BuildingType, Dominion, LandType, QueueReader};

pub trait LandCalculator {
    /// Total acreage. Callers guarantee it is non-zero before dividing by it.
    fn total_land(&self, dominion: &Dominion) -> u64;

    /// Acres of `land_type` with neither a building nor a building under construction.
    fn total_barren_land_by_type(&self, dominion: &Dominion, land_type: LandType) -> u64;

    fn total_barren_land(&self, dominion: &Dominion) -> u64 {
        LandType::ALL
            .iter()
            .map(|&lt| self.total_barren_land_by_type(dominion, lt))
            .sum()
    }
}

/// Barren land is acreage minus constructed buildings minus buildings in the
/// construction queue, per land type.
pub struct StandardLandCalculator<'a> {
    queues: &'a dyn QueueReader,
}

impl<'a> StandardLandCalculator<'a> {
    pub fn new(queues: &'a dyn QueueReader) -> Self {
        Self { queues }
    }
}

impl LandCalculator for StandardLandCalculator<'_> {
    fn total_land(&self, dominion: &Dominion) -> u64 {
        dominion.total_land()
    }

    fn total_barren_land_by_type(&self, dominion: &Dominion, land_type: LandType) -> u64 {
        let constructing = self.queues.construction_queue(dominion.id);
        let occupied: u64 = BuildingType::ALL
            .iter()
            .filter(|&&b| dominion.building_land_type(b) == land_type)
            .map(|b| dominion.building(*b) + queued_total(&constructing, b))
            .sum();
        dominion.land(land_type).saturating_sub(occupied)
    }
}
