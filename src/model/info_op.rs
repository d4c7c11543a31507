//! Info-op records: the realm-shared intelligence a successful
//! info-gathering operation produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dominion::{BuildingType, DominionId, ImprovementType, LandType, RealmId, UnitType};
use super::operation::InfoOpKind;
use super::queue::Queue;
use super::tick::Tick;

/// Identity of an info-op. The caster is not part of it: every
/// member of a realm shares one view of a target per operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InfoOpKey {
    pub source_realm_id: RealmId,
    pub target_dominion_id: DominionId,
    #[serde(rename = "type")]
    pub kind: InfoOpKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoOp {
    pub id: u64,
    pub source_realm_id: RealmId,
    pub target_dominion_id: DominionId,
    #[serde(rename = "type")]
    pub kind: InfoOpKind,
    /// The realm member who most recently cast this operation.
    pub cast_by_dominion_id: DominionId,
    pub payload: InfoOpPayload,
    pub created_at: Tick,
    /// Tick-granular; two casts within one hour share it.
    pub updated_at: Tick,
    /// Starts at 1 and increases on every overwrite, so a later cast
    /// strictly supersedes an earlier one even within the same tick.
    pub revision: u64,
}

impl InfoOp {
    pub fn key(&self) -> InfoOpKey {
        InfoOpKey {
            source_realm_id: self.source_realm_id,
            target_dominion_id: self.target_dominion_id,
            kind: self.kind,
        }
    }

    /// Hours since the last successful cast refreshed this record.
    pub fn age(&self, now: Tick) -> u32 {
        now.hours_since(self.updated_at)
    }
}

/// Operation-specific snapshot. Serialized untagged: the record's `type`
/// already says which shape the payload has.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoOpPayload {
    BarracksSpy(BarracksSpyReport),
    CastleSpy(CastleSpyReport),
    SurveyDominion(SurveyDominionReport),
    LandSpy(LandSpyReport),
}

impl InfoOpPayload {
    pub fn kind(&self) -> InfoOpKind {
        match self {
            InfoOpPayload::BarracksSpy(_) => InfoOpKind::BarracksSpy,
            InfoOpPayload::CastleSpy(_) => InfoOpKind::CastleSpy,
            InfoOpPayload::SurveyDominion(_) => InfoOpKind::SurveyDominion,
            InfoOpPayload::LandSpy(_) => InfoOpKind::LandSpy,
        }
    }

    /// Decode a stored payload whose shape is given by `kind`.
    pub fn from_json(kind: InfoOpKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            InfoOpKind::BarracksSpy => InfoOpPayload::BarracksSpy(serde_json::from_value(value)?),
            InfoOpKind::CastleSpy => InfoOpPayload::CastleSpy(serde_json::from_value(value)?),
            InfoOpKind::SurveyDominion => {
                InfoOpPayload::SurveyDominion(serde_json::from_value(value)?)
            }
            InfoOpKind::LandSpy => InfoOpPayload::LandSpy(serde_json::from_value(value)?),
        })
    }
}

/// Military estimate. Home and returning counts are perturbed; training is exact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarracksSpyReport {
    pub home: BTreeMap<UnitType, u64>,
    pub returning: Queue<UnitType>,
    pub training: Queue<UnitType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReading {
    pub points: u64,
    /// Multiplier bonus the points currently grant (0.05 = +5%).
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastleSpyReport(pub BTreeMap<ImprovementType, ImprovementReading>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyDominionReport {
    pub constructed: BTreeMap<BuildingType, u64>,
    pub constructing: Queue<BuildingType>,
    pub barren_land: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandReading {
    pub amount: u64,
    /// Share of total land, 0–100.
    pub percentage: f64,
    pub barren: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandSpyReport {
    pub explored: BTreeMap<LandType, LandReading>,
    /// Land arriving per hour bucket from exploration and land transfers.
    pub incoming: Queue<LandType>,
}
