use serde::{Deserialize, Serialize};

use super::dominion::DominionId;
use super::tick::Tick;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HistoryEvent {
    PerformEspionageOperation,
}

string_enum!(HistoryEvent {
    PerformEspionageOperation => "perform_espionage_operation",
});

/// One audited action on a dominion, with the attributes it changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub dominion_id: DominionId,
    pub event: HistoryEvent,
    pub changes: Vec<AttributeChange>,
    pub created_at: Tick,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "attribute", rename_all = "snake_case")]
pub enum AttributeChange {
    SpyStrength { old: u32, new: u32 },
    MilitarySpies { old: u64, new: u64 },
}
