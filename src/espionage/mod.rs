//! Espionage resolution: guards, success roll, casualties, snapshots, and
//! the orchestration that commits them.

pub mod accuracy;
pub mod chance;
mod context;
mod error;
pub mod guard;
mod resolve;
mod service;
pub mod survey;

pub use context::EspionageContext;
pub use error::{EspionageError, ProtectedParty, RangeViolation, Result};
pub use resolve::{ActorBasis, ActorDelta, InfoOpWrite, Resolution, resolve_operation};
pub use service::{EspionageService, apply_resolution};
