#[macro_use]
mod macros;

pub mod dominion;
pub mod history;
pub mod info_op;
pub mod operation;
pub mod outcome;
pub mod queue;
pub mod tick;
pub mod world;

pub use dominion::{
    BuildingType, Dominion, DominionId, ImprovementType, LandType, RealmId, RoundId, UnitType,
};
pub use history::{AttributeChange, HistoryEntry, HistoryEvent};
pub use info_op::{
    BarracksSpyReport, CastleSpyReport, ImprovementReading, InfoOp, InfoOpKey, InfoOpPayload,
    LandReading, LandSpyReport, SurveyDominionReport,
};
pub use operation::{InfoOpKind, OperationCatalog, OperationCategory, OperationDescriptor};
pub use outcome::{AlertType, OperationResult};
pub use queue::{HourBuckets, Queue, QueueReader};
pub use tick::Tick;
pub use world::{DominionQueues, World};
