//! Snapshot builders: one per info-gathering operation.
//!
//! Each builder reads the target through the context's collaborators and
//! returns a statically shaped report. Only the barracks spy models partial
//! observation; the others are fully transparent.

use rand::RngCore;

use super::accuracy::{obscure, obscure_queue};
use super::context::EspionageContext;
use crate::model::queue::queued_at;
use crate::model::{
    BarracksSpyReport, BuildingType, CastleSpyReport, Dominion, ImprovementReading,
    ImprovementType, InfoOpKind, InfoOpPayload, LandReading, LandSpyReport, LandType,
    SurveyDominionReport, UnitType,
};

/// Build the snapshot `kind` reveals about `target`.
pub fn survey(
    kind: InfoOpKind,
    ctx: &EspionageContext<'_>,
    target: &Dominion,
    rng: &mut dyn RngCore,
) -> InfoOpPayload {
    match kind {
        InfoOpKind::BarracksSpy => InfoOpPayload::BarracksSpy(barracks_spy(ctx, target, rng)),
        InfoOpKind::CastleSpy => InfoOpPayload::CastleSpy(castle_spy(ctx, target)),
        InfoOpKind::SurveyDominion => InfoOpPayload::SurveyDominion(survey_dominion(ctx, target)),
        InfoOpKind::LandSpy => InfoOpPayload::LandSpy(land_spy(ctx, target)),
    }
}

/// Home units and units returning are estimates; units in training are exact.
///
/// Randomness is drawn for the four home slots first, then for the returning
/// queue in unit then hour order.
pub fn barracks_spy(
    ctx: &EspionageContext<'_>,
    target: &Dominion,
    rng: &mut dyn RngCore,
) -> BarracksSpyReport {
    let accuracy = ctx.config.info_op_accuracy;

    let home = UnitType::SLOTS
        .iter()
        .map(|&slot| (slot, obscure(target.units_at_home(slot), accuracy, rng)))
        .collect();

    let returning = obscure_queue(&ctx.queues.units_returning_queue(target.id), accuracy, rng);

    BarracksSpyReport {
        home,
        returning,
        training: ctx.queues.training_queue(target.id),
    }
}

pub fn castle_spy(ctx: &EspionageContext<'_>, target: &Dominion) -> CastleSpyReport {
    CastleSpyReport(
        ImprovementType::ALL
            .iter()
            .map(|&improvement| {
                let reading = ImprovementReading {
                    points: target.improvement(improvement),
                    rating: ctx.improvements.multiplier_bonus(target, improvement),
                };
                (improvement, reading)
            })
            .collect(),
    )
}

pub fn survey_dominion(ctx: &EspionageContext<'_>, target: &Dominion) -> SurveyDominionReport {
    SurveyDominionReport {
        constructed: BuildingType::ALL
            .iter()
            .map(|&b| (b, target.building(b)))
            .collect(),
        constructing: ctx.queues.construction_queue(target.id),
        barren_land: ctx.land.total_barren_land(target),
    }
}

/// Explored land per type plus the land arriving over the next
/// `incoming_land_hours` hours from exploration and land transfers combined.
pub fn land_spy(ctx: &EspionageContext<'_>, target: &Dominion) -> LandSpyReport {
    let total_land = ctx.land.total_land(target);

    let explored = LandType::ALL
        .iter()
        .map(|&land_type| {
            let amount = target.land(land_type);
            let percentage = if total_land == 0 {
                0.0
            } else {
                amount as f64 / total_land as f64 * 100.0
            };
            let reading = LandReading {
                amount,
                percentage,
                barren: ctx.land.total_barren_land_by_type(target, land_type),
            };
            (land_type, reading)
        })
        .collect();

    let exploring = ctx.queues.exploration_queue(target.id);
    let arriving = ctx.queues.land_incoming_queue(target.id);
    let incoming = LandType::ALL
        .iter()
        .map(|&land_type| {
            let buckets = (0..ctx.config.incoming_land_hours)
                .map(|hour| {
                    let amount = queued_at(&exploring, &land_type, hour)
                        + queued_at(&arriving, &land_type, hour);
                    (hour, amount)
                })
                .collect();
            (land_type, buckets)
        })
        .collect();

    LandSpyReport { explored, incoming }
}
