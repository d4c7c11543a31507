use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::calc::{
    LandRangeCalculator, StandardImprovementCalculator, StandardLandCalculator,
    StandardMilitaryCalculator, TickProtection,
};
use crate::config::EspionageConfig;
use crate::espionage::{EspionageContext, EspionageService, Result};
use crate::model::*;

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// An RNG that panics when drawn from. Proves a code path is deterministic.
pub struct NoRng;

impl RngCore for NoRng {
    fn next_u32(&mut self) -> u32 {
        panic!("NoRng: randomness drawn on a deterministic path")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("NoRng: randomness drawn on a deterministic path")
    }

    fn fill_bytes(&mut self, _dst: &mut [u8]) {
        panic!("NoRng: randomness drawn on a deterministic path")
    }
}

// ---------------------------------------------------------------------------
// Context helpers
// ---------------------------------------------------------------------------

/// Run `f` with a context over `world` using the standard calculators.
pub fn with_context<R>(
    world: &World,
    config: &EspionageConfig,
    catalog: &OperationCatalog,
    f: impl FnOnce(&EspionageContext<'_>) -> R,
) -> R {
    let land = StandardLandCalculator::new(world);
    let range = LandRangeCalculator::from_config(config);
    let ctx = EspionageContext {
        config,
        catalog,
        queues: world,
        land: &land,
        military: &StandardMilitaryCalculator,
        improvements: &StandardImprovementCalculator,
        protection: &TickProtection,
        range: &range,
    };
    f(&ctx)
}

/// [`with_context`] with the default config and the standard catalog.
pub fn with_standard_context<R>(world: &World, f: impl FnOnce(&EspionageContext<'_>) -> R) -> R {
    with_context(
        world,
        &EspionageConfig::default(),
        &OperationCatalog::standard(),
        f,
    )
}

// ---------------------------------------------------------------------------
// Operation helpers
// ---------------------------------------------------------------------------

/// Perform one operation with the default service and a seeded RNG.
pub fn perform(
    world: &mut World,
    actor: DominionId,
    operation_key: &str,
    target: DominionId,
    seed: u64,
) -> Result<OperationResult> {
    let mut rng = SmallRng::seed_from_u64(seed);
    EspionageService::default().perform_operation(world, actor, operation_key, target, &mut rng)
}

/// Snapshot of everything an operation could mutate, for no-mutation assertions.
pub fn mutable_state(world: &World) -> (Vec<Dominion>, usize, usize) {
    (
        world.dominions.values().cloned().collect(),
        world.info_ops.len(),
        world.history.len(),
    )
}

/// Assert `value` lies in `[round(q·accuracy), round(q/accuracy)]`, or is 0 for `q == 0`.
pub fn assert_obscured(value: u64, actual: u64, accuracy: f64) {
    let (low, high) = crate::espionage::accuracy::bounds(actual, accuracy);
    assert!(
        (low..=high).contains(&value),
        "reading {value} outside [{low}, {high}] for actual {actual}"
    );
}
