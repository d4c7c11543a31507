//! Espionage operation catalog.
//!
//! External callers name operations by string key (`"barracks_spy"`). The
//! catalog translates a key into a descriptor once, at the boundary; past
//! that point the engine dispatches on [`OperationCategory`] and
//! [`InfoOpKind`] by exhaustive match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OperationCategory {
    InfoGathering,
    ResourceTheft,
    BlackOperation,
    WarOperation,
}

string_enum!(OperationCategory {
    InfoGathering => "info_gathering",
    ResourceTheft => "resource_theft",
    BlackOperation => "black_operation",
    WarOperation => "war_operation",
});

/// The info-gathering operations the snapshot builder knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum InfoOpKind {
    BarracksSpy,
    CastleSpy,
    SurveyDominion,
    LandSpy,
}

string_enum!(InfoOpKind {
    BarracksSpy => "barracks_spy",
    CastleSpy => "castle_spy",
    SurveyDominion => "survey_dominion",
    LandSpy => "land_spy",
});

/// Static metadata for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: OperationCategory,
}

/// Immutable lookup of operation descriptors by key.
#[derive(Debug, Clone)]
pub struct OperationCatalog {
    operations: BTreeMap<String, OperationDescriptor>,
}

impl OperationCatalog {
    pub fn empty() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// The catalog of every operation the game ships with.
    pub fn standard() -> Self {
        use OperationCategory::*;

        let mut catalog = Self::empty();
        for (key, name, description, category) in [
            (
                "barracks_spy",
                "Barracks Spy",
                "Reveal estimates of units currently at home and returning from battle",
                InfoGathering,
            ),
            (
                "castle_spy",
                "Castle Spy",
                "Reveal castle improvements",
                InfoGathering,
            ),
            (
                "survey_dominion",
                "Survey Dominion",
                "Reveal buildings and buildings under construction",
                InfoGathering,
            ),
            (
                "land_spy",
                "Land Spy",
                "Reveal land and incoming land",
                InfoGathering,
            ),
            ("steal_platinum", "Steal Platinum", "Steal platinum from target", ResourceTheft),
            ("steal_food", "Steal Food", "Steal food from target", ResourceTheft),
            ("steal_lumber", "Steal Lumber", "Steal lumber from target", ResourceTheft),
            ("steal_mana", "Steal Mana", "Steal mana from target", ResourceTheft),
            ("steal_ore", "Steal Ore", "Steal ore from target", ResourceTheft),
            ("steal_gems", "Steal Gems", "Steal gems from target", ResourceTheft),
            (
                "assassinate_draftees",
                "Assassinate Draftees",
                "Kills some draftees",
                BlackOperation,
            ),
            (
                "assassinate_wizards",
                "Assassinate Wizards",
                "Kills some wizards",
                BlackOperation,
            ),
            (
                "magic_snare",
                "Magic Snare",
                "Reduces wizard strength of the target",
                WarOperation,
            ),
            (
                "sabotage_boats",
                "Sabotage Boats",
                "Destroys some boats of the target",
                WarOperation,
            ),
        ] {
            catalog.insert(OperationDescriptor {
                key: key.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                category,
            });
        }
        catalog
    }

    /// Add or replace a descriptor. Used to assemble custom catalogs.
    pub fn insert(&mut self, descriptor: OperationDescriptor) {
        self.operations.insert(descriptor.key.clone(), descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&OperationDescriptor> {
        self.operations.get(key)
    }

    pub fn category(&self, key: &str) -> Option<OperationCategory> {
        self.get(key).map(|d| d.category)
    }

    pub fn is_info_gathering(&self, key: &str) -> bool {
        self.category(key) == Some(OperationCategory::InfoGathering)
    }

    pub fn is_resource_theft(&self, key: &str) -> bool {
        self.category(key) == Some(OperationCategory::ResourceTheft)
    }

    pub fn is_black_operation(&self, key: &str) -> bool {
        self.category(key) == Some(OperationCategory::BlackOperation)
    }

    pub fn is_war_operation(&self, key: &str) -> bool {
        self.category(key) == Some(OperationCategory::WarOperation)
    }

    /// Descriptors in a category, ordered by key.
    pub fn in_category(&self, category: OperationCategory) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations
            .values()
            .filter(move |d| d.category == category)
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
