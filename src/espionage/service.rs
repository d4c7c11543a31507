use rand::RngCore;

use super::context::EspionageContext;
use super::error::{EspionageError, Result};
use super::resolve::{ActorBasis, Resolution, resolve_operation};
use crate::calc::{
    LandRangeCalculator, StandardImprovementCalculator, StandardLandCalculator,
    StandardMilitaryCalculator, TickProtection,
};
use crate::config::EspionageConfig;
use crate::model::{DominionId, HistoryEvent, OperationCatalog, OperationResult, World};

/// Entry point for performing espionage operations against an in-memory [`World`].
///
/// Resolution runs against the world read-only with the standard game
/// calculators; the outcome is then committed in one step, so an error leaves
/// the world untouched.
#[derive(Debug, Clone, Default)]
pub struct EspionageService {
    pub config: EspionageConfig,
    pub catalog: OperationCatalog,
}

impl EspionageService {
    pub fn new(config: EspionageConfig, catalog: OperationCatalog) -> Self {
        Self { config, catalog }
    }

    /// Perform `operation_key` by `actor_id` against `target_id` and commit the outcome.
    pub fn perform_operation(
        &self,
        world: &mut World,
        actor_id: DominionId,
        operation_key: &str,
        target_id: DominionId,
        rng: &mut dyn RngCore,
    ) -> Result<OperationResult> {
        let resolution = self.resolve(world, actor_id, operation_key, target_id, rng)?;
        apply_resolution(world, &resolution)?;
        Ok(resolution.result)
    }

    /// Resolve without committing. Used when the commit happens elsewhere,
    /// e.g. in a database transaction.
    pub fn resolve(
        &self,
        world: &World,
        actor_id: DominionId,
        operation_key: &str,
        target_id: DominionId,
        rng: &mut dyn RngCore,
    ) -> Result<Resolution> {
        let actor = world
            .dominion(actor_id)
            .ok_or(EspionageError::DominionNotFound(actor_id))?;
        let target = world
            .dominion(target_id)
            .ok_or(EspionageError::DominionNotFound(target_id))?;

        let land = StandardLandCalculator::new(world);
        let range = LandRangeCalculator::from_config(&self.config);
        let ctx = EspionageContext {
            config: &self.config,
            catalog: &self.catalog,
            queues: world,
            land: &land,
            military: &StandardMilitaryCalculator,
            improvements: &StandardImprovementCalculator,
            protection: &TickProtection,
            range: &range,
        };

        resolve_operation(&ctx, actor, operation_key, target, rng).inspect_err(|err| {
            if err.is_fatal() {
                tracing::warn!(
                    actor = actor_id,
                    target = target_id,
                    operation = operation_key,
                    error = %err,
                    "espionage engine rejected a catalogued operation"
                );
            }
        })
    }
}

/// Commit a resolution to the world: bill the actor, log history, and store
/// the info-op if one was produced.
///
/// Fails without touching the world if the actor is gone or no longer in the
/// state the resolution was computed from.
pub fn apply_resolution(world: &mut World, resolution: &Resolution) -> Result<()> {
    let actor = world
        .dominion(resolution.actor_id)
        .ok_or(EspionageError::DominionNotFound(resolution.actor_id))?;
    if ActorBasis::of(actor) != resolution.actor_basis {
        tracing::warn!(
            actor = resolution.actor_id,
            expected = ?resolution.actor_basis,
            found = ?ActorBasis::of(actor),
            "stale espionage resolution refused"
        );
        return Err(EspionageError::StaleResolution {
            actor: resolution.actor_id,
        });
    }

    let changes = resolution
        .actor_delta
        .apply(world.dominion_mut(resolution.actor_id));
    world.record_history(
        resolution.actor_id,
        HistoryEvent::PerformEspionageOperation,
        changes,
    );

    if let Some(write) = &resolution.info_op {
        let created = world.upsert_info_op(write.key, write.cast_by, write.payload.clone());
        tracing::info!(
            realm = write.key.source_realm_id,
            target = write.key.target_dominion_id,
            kind = %write.key.kind,
            created,
            "info op stored"
        );
    }

    tracing::info!(
        actor = resolution.actor_id,
        operation = %resolution.result.operation,
        success = resolution.result.success,
        spies_lost = resolution.actor_delta.spies_lost,
        "espionage operation resolved"
    );
    Ok(())
}
