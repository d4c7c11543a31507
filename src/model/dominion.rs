use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type DominionId = u64;
pub type RealmId = u64;
pub type RoundId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LandType {
    Plain,
    Mountain,
    Swamp,
    Cavern,
    Forest,
    Hill,
    Water,
}

string_enum!(LandType {
    Plain => "plain",
    Mountain => "mountain",
    Swamp => "swamp",
    Cavern => "cavern",
    Forest => "forest",
    Hill => "hill",
    Water => "water",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BuildingType {
    Home,
    Alchemy,
    Farm,
    Smithy,
    Masonry,
    OreMine,
    GryphonNest,
    Tower,
    WizardGuild,
    Temple,
    DiamondMine,
    School,
    Lumberyard,
    ForestHaven,
    Factory,
    GuardTower,
    Shrine,
    Barracks,
    Dock,
}

string_enum!(BuildingType {
    Home => "home",
    Alchemy => "alchemy",
    Farm => "farm",
    Smithy => "smithy",
    Masonry => "masonry",
    OreMine => "ore_mine",
    GryphonNest => "gryphon_nest",
    Tower => "tower",
    WizardGuild => "wizard_guild",
    Temple => "temple",
    DiamondMine => "diamond_mine",
    School => "school",
    Lumberyard => "lumberyard",
    ForestHaven => "forest_haven",
    Factory => "factory",
    GuardTower => "guard_tower",
    Shrine => "shrine",
    Barracks => "barracks",
    Dock => "dock",
});

impl BuildingType {
    /// The land type this building is constructed on.
    ///
    /// Homes have no fixed land type; they go on the owning dominion's home land.
    pub fn land_type(self) -> Option<LandType> {
        use BuildingType::*;
        match self {
            Home => None,
            Alchemy | Farm | Smithy | Masonry => Some(LandType::Plain),
            OreMine | GryphonNest => Some(LandType::Mountain),
            Tower | WizardGuild | Temple => Some(LandType::Swamp),
            DiamondMine | School => Some(LandType::Cavern),
            Lumberyard | ForestHaven => Some(LandType::Forest),
            Factory | GuardTower | Shrine | Barracks => Some(LandType::Hill),
            Dock => Some(LandType::Water),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImprovementType {
    Science,
    Keep,
    Towers,
    Forges,
    Walls,
    Harbor,
}

string_enum!(ImprovementType {
    Science => "science",
    Keep => "keep",
    Towers => "towers",
    Forges => "forges",
    Walls => "walls",
    Harbor => "harbor",
});

/// Unit kinds that appear in military counts and unit queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnitType {
    Draftees,
    Unit1,
    Unit2,
    Unit3,
    Unit4,
    Spies,
    Wizards,
}

string_enum!(UnitType {
    Draftees => "draftees",
    Unit1 => "unit1",
    Unit2 => "unit2",
    Unit3 => "unit3",
    Unit4 => "unit4",
    Spies => "spies",
    Wizards => "wizards",
});

impl UnitType {
    /// The four race-specific military unit slots.
    pub const SLOTS: [UnitType; 4] = [
        UnitType::Unit1,
        UnitType::Unit2,
        UnitType::Unit3,
        UnitType::Unit4,
    ];
}

/// A player's dominion: the game state an espionage operation reads from and bills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dominion {
    pub id: DominionId,
    pub name: String,
    pub realm_id: RealmId,
    pub round_id: RoundId,
    pub home_land_type: LandType,

    /// Espionage force strength, 0–100.
    pub spy_strength: u32,
    pub military_draftees: u64,
    /// At-home counts for unit1..unit4.
    pub military_units: [u64; 4],
    pub military_spies: u64,
    pub military_wizards: u64,

    #[serde(default)]
    pub land: BTreeMap<LandType, u64>,
    #[serde(default)]
    pub buildings: BTreeMap<BuildingType, u64>,
    #[serde(default)]
    pub improvements: BTreeMap<ImprovementType, u64>,

    /// Hours of new-player protection left.
    #[serde(default)]
    pub protection_ticks: u32,
    /// Set once the dominion may no longer act (round ended, abandoned).
    #[serde(default)]
    pub locked: bool,
}

impl Dominion {
    pub fn new(id: DominionId, name: String, realm_id: RealmId, round_id: RoundId) -> Self {
        Self {
            id,
            name,
            realm_id,
            round_id,
            home_land_type: LandType::Plain,
            spy_strength: 100,
            military_draftees: 0,
            military_units: [0; 4],
            military_spies: 0,
            military_wizards: 0,
            land: BTreeMap::new(),
            buildings: BTreeMap::new(),
            improvements: BTreeMap::new(),
            protection_ticks: 0,
            locked: false,
        }
    }

    pub fn land(&self, land_type: LandType) -> u64 {
        self.land.get(&land_type).copied().unwrap_or(0)
    }

    pub fn building(&self, building_type: BuildingType) -> u64 {
        self.buildings.get(&building_type).copied().unwrap_or(0)
    }

    pub fn improvement(&self, improvement_type: ImprovementType) -> u64 {
        self.improvements.get(&improvement_type).copied().unwrap_or(0)
    }

    /// Units of the given type currently at home.
    pub fn units_at_home(&self, unit_type: UnitType) -> u64 {
        match unit_type {
            UnitType::Draftees => self.military_draftees,
            UnitType::Unit1 => self.military_units[0],
            UnitType::Unit2 => self.military_units[1],
            UnitType::Unit3 => self.military_units[2],
            UnitType::Unit4 => self.military_units[3],
            UnitType::Spies => self.military_spies,
            UnitType::Wizards => self.military_wizards,
        }
    }

    /// Land a building of this type occupies for this dominion.
    pub fn building_land_type(&self, building_type: BuildingType) -> LandType {
        building_type.land_type().unwrap_or(self.home_land_type)
    }

    pub fn total_land(&self) -> u64 {
        self.land.values().sum()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
