use crate::model::*;

/// IDs returned by [`Scenario::add_rivals`].
pub struct RivalIds {
    pub actor: DominionId,
    pub target: DominionId,
}

/// Acreage [`Scenario::add_rivals`] gives both sides, all of it plain.
pub const RIVAL_LAND: u64 = 250;

// -- Builder-style ref type --

/// Typed reference to a dominion in a [`Scenario`], enabling chained field mutation.
///
/// Created by [`Scenario::dominion`] (creation) or [`Scenario::dominion_mut`] (mutation).
/// Call [`.id()`](DominionRef::id) to terminate the chain and extract the dominion ID.
pub struct DominionRef<'a> {
    scenario: &'a mut Scenario,
    id: DominionId,
}

impl<'a> DominionRef<'a> {
    fn data_mut(&mut self) -> &mut Dominion {
        self.scenario.world.dominion_mut(self.id)
    }

    pub fn realm(mut self, v: RealmId) -> Self { self.data_mut().realm_id = v; self }
    pub fn round(mut self, v: RoundId) -> Self { self.data_mut().round_id = v; self }
    pub fn home_land(mut self, v: LandType) -> Self { self.data_mut().home_land_type = v; self }
    pub fn spy_strength(mut self, v: u32) -> Self { self.data_mut().spy_strength = v; self }
    pub fn spies(mut self, v: u64) -> Self { self.data_mut().military_spies = v; self }
    pub fn wizards(mut self, v: u64) -> Self { self.data_mut().military_wizards = v; self }
    pub fn draftees(mut self, v: u64) -> Self { self.data_mut().military_draftees = v; self }
    pub fn units(mut self, v: [u64; 4]) -> Self { self.data_mut().military_units = v; self }
    pub fn protection_ticks(mut self, v: u32) -> Self { self.data_mut().protection_ticks = v; self }
    pub fn locked(mut self, v: bool) -> Self { self.data_mut().locked = v; self }

    pub fn land(mut self, land_type: LandType, acres: u64) -> Self {
        self.data_mut().land.insert(land_type, acres);
        self
    }

    pub fn building(mut self, building_type: BuildingType, count: u64) -> Self {
        self.data_mut().buildings.insert(building_type, count);
        self
    }

    pub fn improvement(mut self, improvement_type: ImprovementType, points: u64) -> Self {
        self.data_mut().improvements.insert(improvement_type, points);
        self
    }

    /// Escape hatch: apply an arbitrary closure to the dominion.
    pub fn with(mut self, f: impl FnOnce(&mut Dominion)) -> Self { f(self.data_mut()); self }

    /// Terminate the chain and return the dominion ID.
    pub fn id(self) -> DominionId { self.id }
}

/// Builder for small hand-made worlds, mostly for tests and demos.
///
/// Every dominion joins round 1 unless changed through its [`DominionRef`].
pub struct Scenario {
    world: World,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Create a new scenario at day 1, hour 0.
    pub fn new() -> Self {
        Self::at(Tick::default())
    }

    /// Create a new scenario whose clock reads `time`.
    pub fn at(time: Tick) -> Self {
        let mut world = World::new();
        world.current_time = time;
        Self { world }
    }

    /// Add a dominion to `realm` and return a ref for chained setup.
    pub fn dominion(&mut self, name: &str, realm: RealmId) -> DominionRef<'_> {
        let id = self.add_dominion(name, realm);
        DominionRef { scenario: self, id }
    }

    /// Mutate an existing dominion through a chained ref.
    ///
    /// # Panics
    /// Panics if `id` does not exist.
    pub fn dominion_mut(&mut self, id: DominionId) -> DominionRef<'_> {
        assert!(
            self.world.dominions.contains_key(&id),
            "dominion_mut: dominion {id} not found"
        );
        DominionRef { scenario: self, id }
    }

    pub fn add_dominion(&mut self, name: &str, realm: RealmId) -> DominionId {
        self.world.add_dominion(name.to_string(), realm, 1)
    }

    pub fn add_dominion_with(
        &mut self,
        name: &str,
        realm: RealmId,
        modify: impl FnOnce(&mut Dominion),
    ) -> DominionId {
        let id = self.add_dominion(name, realm);
        modify(self.world.dominion_mut(id));
        id
    }

    /// Two same-sized dominions in realms 1 and 2, each fully out of
    /// protection with full spy strength and the given spies.
    pub fn add_rivals(&mut self, actor_spies: u64, target_spies: u64) -> RivalIds {
        let actor = self
            .dominion("Ashfall", 1)
            .land(LandType::Plain, RIVAL_LAND)
            .spies(actor_spies)
            .id();
        let target = self
            .dominion("Briarholt", 2)
            .land(LandType::Plain, RIVAL_LAND)
            .spies(target_spies)
            .id();
        RivalIds { actor, target }
    }

    pub fn queue_training(&mut self, id: DominionId, unit: UnitType, hours: u32, amount: u64) {
        self.world.queue_training(id, unit, hours, amount);
    }

    pub fn queue_units_returning(&mut self, id: DominionId, unit: UnitType, hours: u32, amount: u64) {
        self.world.queue_units_returning(id, unit, hours, amount);
    }

    pub fn queue_construction(
        &mut self,
        id: DominionId,
        building: BuildingType,
        hours: u32,
        amount: u64,
    ) {
        self.world.queue_construction(id, building, hours, amount);
    }

    pub fn queue_exploration(&mut self, id: DominionId, land: LandType, hours: u32, amount: u64) {
        self.world.queue_exploration(id, land, hours, amount);
    }

    pub fn queue_land_incoming(&mut self, id: DominionId, land: LandType, hours: u32, amount: u64) {
        self.world.queue_land_incoming(id, land, hours, amount);
    }

    /// Consume the scenario and return the world.
    pub fn build(self) -> World {
        self.world
    }

    /// Borrow the world for inspection.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
