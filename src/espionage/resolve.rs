//! The pure resolution core.
//!
//! [`resolve_operation`] reads the actor, target and collaborators, draws
//! whatever randomness the outcome needs, and describes every mutation as
//! data. Nothing is written here; callers commit a [`Resolution`] in one step
//! (in memory via [`apply_resolution`](super::apply_resolution), or in
//! Postgres via [`db::commit`](crate::db::commit)).

use rand::RngCore;

use super::chance::{roll, spies_lost, success_rate};
use super::context::EspionageContext;
use super::error::{EspionageError, Result};
use super::guard::validate;
use super::survey::survey;
use crate::model::{
    AttributeChange, BuildingType, Dominion, DominionId, InfoOpKey, InfoOpKind, InfoOpPayload,
    OperationCategory, OperationDescriptor, OperationResult,
};

/// Everything an attempt that reached the commit point changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub actor_id: DominionId,
    /// The actor's billable state the outcome was computed from.
    pub actor_basis: ActorBasis,
    pub result: OperationResult,
    pub actor_delta: ActorDelta,
    /// Set only on a successful info-gathering cast.
    pub info_op: Option<InfoOpWrite>,
}

/// The actor fields a resolution reads and bills. A commit must find the
/// actor still in this state, otherwise the resolution is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorBasis {
    pub spy_strength: u32,
    pub military_spies: u64,
    pub locked: bool,
}

impl ActorBasis {
    pub fn of(dominion: &Dominion) -> Self {
        Self {
            spy_strength: dominion.spy_strength,
            military_spies: dominion.military_spies,
            locked: dominion.locked,
        }
    }
}

/// Costs billed to the actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorDelta {
    pub spy_strength_lost: u32,
    pub spies_lost: u64,
}

impl ActorDelta {
    /// Old/new value of every attribute the costs change, starting from the
    /// given current values. Both floor at zero.
    pub fn changes(&self, spy_strength: u32, military_spies: u64) -> Vec<AttributeChange> {
        let mut changes = Vec::new();
        if self.spy_strength_lost > 0 {
            changes.push(AttributeChange::SpyStrength {
                old: spy_strength,
                new: spy_strength.saturating_sub(self.spy_strength_lost),
            });
        }
        if self.spies_lost > 0 {
            changes.push(AttributeChange::MilitarySpies {
                old: military_spies,
                new: military_spies.saturating_sub(self.spies_lost),
            });
        }
        changes
    }

    /// Apply the costs, returning the old/new value of every attribute that changed.
    pub fn apply(&self, dominion: &mut Dominion) -> Vec<AttributeChange> {
        let changes = self.changes(dominion.spy_strength, dominion.military_spies);
        for change in &changes {
            match *change {
                AttributeChange::SpyStrength { new, .. } => dominion.spy_strength = new,
                AttributeChange::MilitarySpies { new, .. } => dominion.military_spies = new,
            }
        }
        changes
    }
}

/// A snapshot to store under the realm's shared key.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoOpWrite {
    pub key: InfoOpKey,
    pub cast_by: DominionId,
    pub payload: InfoOpPayload,
}

/// Validate and resolve one operation by `actor` against `target`.
///
/// Guard failures and unimplemented categories are returned as errors and
/// must not be billed. A lost success roll is an `Ok` resolution with
/// `success: false`.
pub fn resolve_operation(
    ctx: &EspionageContext<'_>,
    actor: &Dominion,
    operation_key: &str,
    target: &Dominion,
    rng: &mut dyn RngCore,
) -> Result<Resolution> {
    let operation = validate(ctx, actor, operation_key, target)?;

    match operation.category {
        OperationCategory::InfoGathering => {
            resolve_info_gathering(ctx, actor, operation, target, rng)
        }
        category @ (OperationCategory::ResourceTheft
        | OperationCategory::BlackOperation
        | OperationCategory::WarOperation) => Err(EspionageError::CategoryNotImplemented {
            key: operation.key.clone(),
            category,
        }),
    }
}

fn resolve_info_gathering(
    ctx: &EspionageContext<'_>,
    actor: &Dominion,
    operation: &OperationDescriptor,
    target: &Dominion,
    rng: &mut dyn RngCore,
) -> Result<Resolution> {
    let kind = InfoOpKind::try_from(operation.key.as_str()).map_err(|_| {
        EspionageError::UnknownInfoGatheringVariant {
            key: operation.key.clone(),
        }
    })?;

    let mut actor_delta = ActorDelta {
        spy_strength_lost: ctx.config.info_op_spy_strength_cost,
        spies_lost: 0,
    };

    let self_ratio = ctx.military.spy_ratio(actor);
    let target_ratio = ctx.military.spy_ratio(target);

    if self_ratio == 0.0 {
        return Ok(Resolution {
            actor_id: actor.id,
            actor_basis: ActorBasis::of(actor),
            result: OperationResult::failed(
                &operation.key,
                format!(
                    "Your spy force is too weak to cast {}. Please train some more spies.",
                    operation.name
                ),
            ),
            actor_delta,
            info_op: None,
        });
    }

    // A target without spies cannot resist.
    if target_ratio != 0.0 {
        let ratio = self_ratio / target_ratio;
        let chance = success_rate(ratio);
        let succeeded = roll(chance, rng);
        tracing::debug!(
            operation = %operation.key,
            actor = actor.id,
            target = target.id,
            ratio,
            chance,
            succeeded,
            "espionage roll"
        );

        if !succeeded {
            actor_delta.spies_lost = spies_lost(
                actor.military_spies,
                actor.building(BuildingType::ForestHaven),
                ctx.land.total_land(actor),
                ctx.config,
            );
            tracing::debug!(
                actor = actor.id,
                spies = actor.military_spies,
                spies_lost = actor_delta.spies_lost,
                "spies captured"
            );
            return Ok(Resolution {
                actor_id: actor.id,
                actor_basis: ActorBasis::of(actor),
                result: OperationResult::failed(
                    &operation.key,
                    format!(
                        "The enemy has prevented our {} attempt and managed to capture {} of our spies.",
                        operation.name,
                        thousands(actor_delta.spies_lost)
                    ),
                ),
                actor_delta,
                info_op: None,
            });
        }
    }

    let payload = survey(kind, ctx, target, rng);

    Ok(Resolution {
        actor_id: actor.id,
        actor_basis: ActorBasis::of(actor),
        result: OperationResult::succeeded(
            &operation.key,
            "Your spies infiltrate the target's dominion successfully and return with a wealth of information."
                .to_string(),
            target.id,
        ),
        actor_delta,
        info_op: Some(InfoOpWrite {
            key: InfoOpKey {
                source_realm_id: actor.realm_id,
                target_dominion_id: target.id,
                kind,
            },
            cast_by: actor.id,
            payload,
        }),
    })
}

/// `1234567` → `"1,234,567"`.
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
