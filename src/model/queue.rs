//! Delayed-arrival queues and their read contract.
//!
//! A queue maps a resource or unit type to hour buckets: hours until arrival
//! → quantity arriving. Producers (training, construction, exploration,
//! returning armies, land transfers) live outside this crate; espionage only
//! ever reads a queue as one consistent snapshot.

use std::collections::BTreeMap;

use super::dominion::{BuildingType, DominionId, LandType, UnitType};

/// Hours-until-arrival → quantity.
pub type HourBuckets = BTreeMap<u32, u64>;

/// Resource/unit type → hour buckets.
pub type Queue<K> = BTreeMap<K, HourBuckets>;

/// Read-only access to every queue an espionage operation consults.
///
/// Object-safe so engines can hold a `&dyn QueueReader`.
pub trait QueueReader {
    fn training_queue(&self, dominion_id: DominionId) -> Queue<UnitType>;
    fn units_returning_queue(&self, dominion_id: DominionId) -> Queue<UnitType>;
    fn construction_queue(&self, dominion_id: DominionId) -> Queue<BuildingType>;
    fn exploration_queue(&self, dominion_id: DominionId) -> Queue<LandType>;
    fn land_incoming_queue(&self, dominion_id: DominionId) -> Queue<LandType>;
}

/// Quantity arriving in exactly `hour` hours, 0 when the bucket is absent.
pub fn queued_at<K: Ord>(queue: &Queue<K>, key: &K, hour: u32) -> u64 {
    queue
        .get(key)
        .and_then(|buckets| buckets.get(&hour))
        .copied()
        .unwrap_or(0)
}

/// Total queued quantity for `key` across all hours.
pub fn queued_total<K: Ord>(queue: &Queue<K>, key: &K) -> u64 {
    queue.get(key).map(|buckets| buckets.values().sum()).unwrap_or(0)
}
