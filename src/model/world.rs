use std::collections::BTreeMap;

use super::dominion::{BuildingType, Dominion, DominionId, LandType, RealmId, RoundId, UnitType};
use super::history::{AttributeChange, HistoryEntry, HistoryEvent};
use super::info_op::{InfoOp, InfoOpKey, InfoOpPayload};
use super::queue::{Queue, QueueReader};
use super::tick::Tick;
use crate::id::IdGenerator;

/// Every pending-arrival queue held for one dominion.
#[derive(Debug, Clone, Default)]
pub struct DominionQueues {
    pub training: Queue<UnitType>,
    pub units_returning: Queue<UnitType>,
    pub construction: Queue<BuildingType>,
    pub exploration: Queue<LandType>,
    pub land_incoming: Queue<LandType>,
}

/// In-memory game state: dominions, their queues, realm intelligence and history.
#[derive(Debug)]
pub struct World {
    pub dominions: BTreeMap<DominionId, Dominion>,
    pub queues: BTreeMap<DominionId, DominionQueues>,
    pub info_ops: BTreeMap<InfoOpKey, InfoOp>,
    pub history: Vec<HistoryEntry>,
    pub id_gen: IdGenerator,
    pub current_time: Tick,
}

impl World {
    pub fn new() -> Self {
        Self {
            dominions: BTreeMap::new(),
            queues: BTreeMap::new(),
            info_ops: BTreeMap::new(),
            history: Vec::new(),
            id_gen: IdGenerator::new(),
            current_time: Tick::default(),
        }
    }

    /// Add a dominion with default stats, assigning it a unique ID.
    /// Returns the assigned ID.
    pub fn add_dominion(&mut self, name: String, realm_id: RealmId, round_id: RoundId) -> DominionId {
        let id = self.id_gen.next_id();
        self.dominions
            .insert(id, Dominion::new(id, name, realm_id, round_id));
        id
    }

    pub fn dominion(&self, id: DominionId) -> Option<&Dominion> {
        self.dominions.get(&id)
    }

    /// # Panics
    /// Panics if `id` does not exist in the world.
    pub fn dominion_mut(&mut self, id: DominionId) -> &mut Dominion {
        self.dominions
            .get_mut(&id)
            .unwrap_or_else(|| panic!("dominion_mut: dominion {id} not found"))
    }

    fn queues_mut(&mut self, id: DominionId) -> &mut DominionQueues {
        assert!(
            self.dominions.contains_key(&id),
            "queue: dominion {id} not found"
        );
        self.queues.entry(id).or_default()
    }

    /// Queue `amount` units finishing training in `hours`.
    pub fn queue_training(&mut self, id: DominionId, unit: UnitType, hours: u32, amount: u64) {
        add_to_bucket(&mut self.queues_mut(id).training, unit, hours, amount);
    }

    /// Queue `amount` units returning home from battle in `hours`.
    pub fn queue_units_returning(&mut self, id: DominionId, unit: UnitType, hours: u32, amount: u64) {
        add_to_bucket(&mut self.queues_mut(id).units_returning, unit, hours, amount);
    }

    pub fn queue_construction(
        &mut self,
        id: DominionId,
        building: BuildingType,
        hours: u32,
        amount: u64,
    ) {
        add_to_bucket(&mut self.queues_mut(id).construction, building, hours, amount);
    }

    pub fn queue_exploration(&mut self, id: DominionId, land: LandType, hours: u32, amount: u64) {
        add_to_bucket(&mut self.queues_mut(id).exploration, land, hours, amount);
    }

    /// Queue conquered land arriving in `hours`.
    pub fn queue_land_incoming(&mut self, id: DominionId, land: LandType, hours: u32, amount: u64) {
        add_to_bucket(&mut self.queues_mut(id).land_incoming, land, hours, amount);
    }

    pub fn info_op(&self, key: &InfoOpKey) -> Option<&InfoOp> {
        self.info_ops.get(key)
    }

    /// Every info-op a realm holds, ordered by key.
    pub fn realm_info_ops(&self, realm_id: RealmId) -> impl Iterator<Item = &InfoOp> {
        self.info_ops
            .values()
            .filter(move |op| op.source_realm_id == realm_id)
    }

    /// Create or refresh the info-op under `key`.
    ///
    /// An existing record keeps its ID and creation time; its caster, payload and
    /// `updated_at` are always overwritten, even when the payload is unchanged,
    /// and its revision is bumped.
    /// Returns `true` if a new record was created.
    ///
    /// # Panics
    /// Panics if the payload shape does not match `key.kind`.
    pub fn upsert_info_op(
        &mut self,
        key: InfoOpKey,
        cast_by: DominionId,
        payload: InfoOpPayload,
    ) -> bool {
        assert_eq!(
            payload.kind(),
            key.kind,
            "upsert_info_op: payload shape does not match operation type"
        );
        let now = self.current_time;
        match self.info_ops.get_mut(&key) {
            Some(existing) => {
                existing.cast_by_dominion_id = cast_by;
                existing.payload = payload;
                existing.updated_at = now;
                existing.revision += 1;
                false
            }
            None => {
                let id = self.id_gen.next_id();
                self.info_ops.insert(
                    key,
                    InfoOp {
                        id,
                        source_realm_id: key.source_realm_id,
                        target_dominion_id: key.target_dominion_id,
                        kind: key.kind,
                        cast_by_dominion_id: cast_by,
                        payload,
                        created_at: now,
                        updated_at: now,
                        revision: 1,
                    },
                );
                true
            }
        }
    }

    /// Append a history entry stamped with the current time.
    /// Returns the assigned ID.
    ///
    /// # Panics
    /// Panics if `dominion_id` does not exist in the world.
    pub fn record_history(
        &mut self,
        dominion_id: DominionId,
        event: HistoryEvent,
        changes: Vec<AttributeChange>,
    ) -> u64 {
        assert!(
            self.dominions.contains_key(&dominion_id),
            "record_history: dominion {dominion_id} not found"
        );
        let id = self.id_gen.next_id();
        self.history.push(HistoryEntry {
            id,
            dominion_id,
            event,
            changes,
            created_at: self.current_time,
        });
        id
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueReader for World {
    fn training_queue(&self, dominion_id: DominionId) -> Queue<UnitType> {
        self.queues
            .get(&dominion_id)
            .map(|q| q.training.clone())
            .unwrap_or_default()
    }

    fn units_returning_queue(&self, dominion_id: DominionId) -> Queue<UnitType> {
        self.queues
            .get(&dominion_id)
            .map(|q| q.units_returning.clone())
            .unwrap_or_default()
    }

    fn construction_queue(&self, dominion_id: DominionId) -> Queue<BuildingType> {
        self.queues
            .get(&dominion_id)
            .map(|q| q.construction.clone())
            .unwrap_or_default()
    }

    fn exploration_queue(&self, dominion_id: DominionId) -> Queue<LandType> {
        self.queues
            .get(&dominion_id)
            .map(|q| q.exploration.clone())
            .unwrap_or_default()
    }

    fn land_incoming_queue(&self, dominion_id: DominionId) -> Queue<LandType> {
        self.queues
            .get(&dominion_id)
            .map(|q| q.land_incoming.clone())
            .unwrap_or_default()
    }
}

fn add_to_bucket<K: Ord>(queue: &mut Queue<K>, key: K, hours: u32, amount: u64) {
    *queue.entry(key).or_default().entry(hours).or_insert(0) += amount;
}
