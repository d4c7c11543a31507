use std::fmt;

use thiserror::Error;

use crate::model::{DominionId, OperationCategory};

/// Result type alias using [`EspionageError`].
pub type Result<T> = std::result::Result<T, EspionageError>;

/// Which side of an operation is still under protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedParty {
    Actor,
    Target,
}

/// Why a target is not reachable from the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    OutsideLandRange,
    CrossRound,
}

/// Everything that aborts an espionage operation before it commits.
///
/// A lost success roll is not an error: it is an ordinary failed
/// [`OperationResult`](crate::model::OperationResult) and is still billed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EspionageError {
    #[error("Dominion {0} not found")]
    DominionNotFound(DominionId),

    #[error("You cannot perform actions while your dominion is locked")]
    ActionLocked,

    #[error("Cannot perform unknown operation '{key}'")]
    UnknownOperation { key: String },

    #[error("Your spies do not have enough strength to perform {operation_name}.")]
    InsufficientForce { operation_name: String },

    #[error("{party}")]
    TargetOrActorProtected { party: ProtectedParty },

    #[error("{violation}")]
    OutOfRange { violation: RangeViolation },

    #[error("Nice try, but you cannot perform espionage operations on your realmies")]
    SameRealm,

    /// The actor's spy force changed between resolution and commit.
    #[error("Your spies were already dispatched elsewhere, please try again")]
    StaleResolution { actor: DominionId },

    /// The catalog knows the operation but its category has no engine yet.
    #[error("Espionage operation '{key}' ({category}) is not yet implemented")]
    CategoryNotImplemented {
        key: String,
        category: OperationCategory,
    },

    /// The catalog lists an info-gathering operation the snapshot builder cannot produce.
    #[error("Unknown info gathering operation '{key}'")]
    UnknownInfoGatheringVariant { key: String },
}

impl EspionageError {
    /// Programming or catalog errors, as opposed to gameplay rejections.
    ///
    /// Fatal errors should be reported as internal errors, never shown as a
    /// gameplay message.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EspionageError::CategoryNotImplemented { .. }
                | EspionageError::UnknownInfoGatheringVariant { .. }
        )
    }
}

impl fmt::Display for ProtectedParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProtectedParty::Actor => "You cannot perform espionage operations while under protection",
            ProtectedParty::Target => {
                "You cannot perform espionage operations to targets which are under protection"
            }
        })
    }
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RangeViolation::OutsideLandRange => {
                "You cannot perform espionage operations to targets outside of your range"
            }
            RangeViolation::CrossRound => {
                "Nice try, but you cannot perform espionage operations cross-round"
            }
        })
    }
}
