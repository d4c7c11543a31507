//! Preconditions checked before an operation may touch any state.

use super::context::EspionageContext;
use super::error::{EspionageError, ProtectedParty, RangeViolation, Result};
use crate::model::{Dominion, OperationDescriptor};

/// Run every precondition in order, stopping at the first violation.
///
/// Returns the operation's descriptor when the actor may proceed.
pub fn validate<'a>(
    ctx: &EspionageContext<'a>,
    dominion: &Dominion,
    operation_key: &str,
    target: &Dominion,
) -> Result<&'a OperationDescriptor> {
    if dominion.is_locked() {
        return Err(EspionageError::ActionLocked);
    }

    let operation = ctx
        .catalog
        .get(operation_key)
        .ok_or_else(|| EspionageError::UnknownOperation {
            key: operation_key.to_string(),
        })?;

    // Absolute strength, not relative to anything.
    if dominion.spy_strength < ctx.config.min_spy_strength {
        return Err(EspionageError::InsufficientForce {
            operation_name: operation.name.clone(),
        });
    }

    if ctx.protection.is_under_protection(dominion) {
        return Err(EspionageError::TargetOrActorProtected {
            party: ProtectedParty::Actor,
        });
    }

    if ctx.protection.is_under_protection(target) {
        return Err(EspionageError::TargetOrActorProtected {
            party: ProtectedParty::Target,
        });
    }

    if !ctx.range.is_in_range(dominion, target) {
        return Err(EspionageError::OutOfRange {
            violation: RangeViolation::OutsideLandRange,
        });
    }

    if dominion.round_id != target.round_id {
        return Err(EspionageError::OutOfRange {
            violation: RangeViolation::CrossRound,
        });
    }

    if dominion.realm_id == target.realm_id {
        return Err(EspionageError::SameRealm);
    }

    Ok(operation)
}
