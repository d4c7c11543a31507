pub mod calc;
pub mod config;
pub mod db;
pub mod espionage;
pub mod flush;
pub mod id;
pub mod model;
pub mod scenario;
pub mod testutil;

pub use config::EspionageConfig;
pub use espionage::{EspionageError, EspionageService, Resolution};
pub use id::IdGenerator;
pub use model::{
    Dominion, DominionId, InfoOp, InfoOpKey, InfoOpKind, InfoOpPayload, OperationCatalog,
    OperationResult, Tick, World,
};
pub use scenario::Scenario;
