mod common;

use dominion_espionage::espionage::{EspionageError, EspionageService, ProtectedParty};
use dominion_espionage::model::*;
use dominion_espionage::scenario::Scenario;
use dominion_espionage::testutil::{self, NoRng, assert_obscured, mutable_state};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const INFO_OPS: [&str; 4] = ["barracks_spy", "castle_spy", "survey_dominion", "land_spy"];

fn key(realm: RealmId, target: DominionId, kind: InfoOpKind) -> InfoOpKey {
    InfoOpKey {
        source_realm_id: realm,
        target_dominion_id: target,
        kind,
    }
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

#[test]
fn weak_spy_force_is_rejected_without_mutation() {
    for strength in [0, 1, 15, 29] {
        let (mut world, ids, _) = common::build_test_world();
        world.dominion_mut(ids.actor).spy_strength = strength;
        let before = mutable_state(&world);

        for op in INFO_OPS {
            let err = testutil::perform(&mut world, ids.actor, op, ids.target, 1).unwrap_err();
            assert!(
                matches!(err, EspionageError::InsufficientForce { .. }),
                "{op} at {strength}: {err:?}"
            );
        }

        assert_eq!(mutable_state(&world), before);
    }
}

#[test]
fn protection_on_either_side_blocks_and_writes_nothing() {
    for (protect_actor, party) in [(true, ProtectedParty::Actor), (false, ProtectedParty::Target)] {
        let (mut world, ids, _) = common::build_test_world();
        let protected = if protect_actor { ids.actor } else { ids.target };
        world.dominion_mut(protected).protection_ticks = 24;
        let before = mutable_state(&world);

        let err = testutil::perform(&mut world, ids.actor, "castle_spy", ids.target, 1).unwrap_err();

        assert_eq!(err, EspionageError::TargetOrActorProtected { party });
        assert!(world.info_ops.is_empty());
        assert_eq!(mutable_state(&world), before);
    }
}

#[test]
fn same_realm_is_rejected_when_everything_else_holds() {
    let (mut world, ids, ally) = common::build_test_world();
    let before = mutable_state(&world);

    for op in INFO_OPS {
        assert_eq!(
            testutil::perform(&mut world, ids.actor, op, ally, 1),
            Err(EspionageError::SameRealm)
        );
    }
    assert_eq!(mutable_state(&world), before);
}

#[test]
fn locked_actor_cannot_act() {
    let (mut world, ids, _) = common::build_test_world();
    world.dominion_mut(ids.actor).locked = true;
    assert_eq!(
        testutil::perform(&mut world, ids.actor, "land_spy", ids.target, 1),
        Err(EspionageError::ActionLocked)
    );
}

#[test]
fn cross_round_target_is_out_of_range() {
    let (mut world, ids, _) = common::build_test_world();
    world.dominion_mut(ids.target).round_id = 2;
    let err = testutil::perform(&mut world, ids.actor, "land_spy", ids.target, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Nice try, but you cannot perform espionage operations cross-round"
    );
}

#[test]
fn unimplemented_categories_are_fatal_and_unbilled() {
    let (mut world, ids, _) = common::build_test_world();
    let before = mutable_state(&world);

    for op in ["steal_food", "assassinate_draftees", "magic_snare"] {
        let err = testutil::perform(&mut world, ids.actor, op, ids.target, 1).unwrap_err();
        assert!(err.is_fatal(), "{op}: {err:?}");
    }
    assert_eq!(mutable_state(&world), before);
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[test]
fn spyless_actor_is_too_weak_and_loses_no_spies() {
    let mut s = Scenario::new();
    let ids = s.add_rivals(0, 100);
    s.dominion_mut(ids.actor).spy_strength(40);
    let mut world = s.build();

    let result = EspionageService::default()
        .perform_operation(&mut world, ids.actor, "barracks_spy", ids.target, &mut NoRng)
        .unwrap();

    assert!(!result.success);
    assert!(result.message.contains("too weak"));
    assert_eq!(result.alert_type, AlertType::Warning);
    assert_eq!(result.redirect, None);
    assert!(world.info_ops.is_empty());
    let actor = world.dominion(ids.actor).unwrap();
    assert_eq!(actor.military_spies, 0);
    // The attempt still reaches the commit point and pays for it.
    assert_eq!(actor.spy_strength, 38);
    assert_eq!(
        world.history[0].changes,
        vec![AttributeChange::SpyStrength { old: 40, new: 38 }]
    );
}

#[test]
fn spyless_target_always_yields_intelligence() {
    let mut s = Scenario::new();
    let ids = s.add_rivals(250, 0);
    s.dominion_mut(ids.actor).spy_strength(40);
    let mut world = s.build();

    let result = EspionageService::default()
        .perform_operation(&mut world, ids.actor, "castle_spy", ids.target, &mut NoRng)
        .unwrap();

    assert!(result.success);
    assert_eq!(result.redirect, Some(ids.target));
    assert_eq!(result.alert_type, AlertType::Success);
    let op = world
        .info_op(&key(1, ids.target, InfoOpKind::CastleSpy))
        .unwrap();
    assert_eq!(op.cast_by_dominion_id, ids.actor);
}

#[test]
fn spyless_target_succeeds_for_every_info_op_and_seed() {
    for seed in 0..20 {
        let (mut world, ids, _) = common::build_test_world();
        for op in INFO_OPS {
            let result = testutil::perform(&mut world, ids.actor, op, ids.target, seed).unwrap();
            assert!(result.success, "{op} with seed {seed}");
        }
        assert_eq!(world.info_ops.len(), 4);
    }
}

#[test]
fn caught_spies_match_forest_haven_casualty_model() {
    let mut s = Scenario::new();
    let actor = s
        .dominion("Ashfall", 1)
        .land(LandType::Plain, 270)
        .land(LandType::Forest, 30)
        .building(BuildingType::ForestHaven, 10)
        .spies(100)
        .spy_strength(40)
        .id();
    let target = s
        .dominion("Briarholt", 2)
        .land(LandType::Plain, 300)
        .spies(30_000)
        .id();
    let mut world = s.build();

    let result = testutil::perform(&mut world, actor, "land_spy", target, 9).unwrap();

    assert!(!result.success);
    assert_eq!(
        result.message,
        "The enemy has prevented our Land Spy attempt and managed to capture 2 of our spies."
    );
    let d = world.dominion(actor).unwrap();
    assert_eq!(d.military_spies, 98);
    assert_eq!(d.spy_strength, 38);
    assert!(world.info_ops.is_empty());
    assert_eq!(
        world.history[0].changes,
        vec![
            AttributeChange::SpyStrength { old: 40, new: 38 },
            AttributeChange::MilitarySpies { old: 100, new: 98 },
        ]
    );
}

#[test]
fn parity_success_rate_tracks_the_curve() {
    let mut s = Scenario::new();
    let ids = s.add_rivals(200, 200);
    let mut world = s.build();
    let service = EspionageService::default();
    let mut rng = SmallRng::seed_from_u64(2024);

    let trials = 2_000;
    let mut successes = 0;
    for _ in 0..trials {
        let d = world.dominion_mut(ids.actor);
        d.spy_strength = 100;
        d.military_spies = 200;
        let result = service
            .perform_operation(&mut world, ids.actor, "castle_spy", ids.target, &mut rng)
            .unwrap();
        if result.success {
            successes += 1;
        }
    }

    let rate = successes as f64 / trials as f64;
    assert!((rate - 0.4996).abs() < 0.05, "rate = {rate}");
}

#[test]
fn same_seed_same_world() {
    let run = || {
        let (mut world, ids, _) = common::build_test_world();
        world.dominion_mut(ids.target).military_spies = 200;
        for (i, op) in INFO_OPS.iter().enumerate() {
            let _ = testutil::perform(&mut world, ids.actor, op, ids.target, 77 + i as u64);
        }
        (mutable_state(&world), world.info_ops.values().cloned().collect::<Vec<_>>())
    };
    assert_eq!(run(), run());
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn barracks_readings_stay_within_accuracy_band() {
    for seed in 0..50 {
        let (mut world, ids, _) = common::build_test_world();
        testutil::perform(&mut world, ids.actor, "barracks_spy", ids.target, seed).unwrap();

        let op = world
            .info_op(&key(1, ids.target, InfoOpKind::BarracksSpy))
            .unwrap();
        let InfoOpPayload::BarracksSpy(report) = &op.payload else {
            panic!("expected barracks payload");
        };
        assert_obscured(report.home[&UnitType::Unit1], 800, 0.85);
        assert_obscured(report.home[&UnitType::Unit2], 240, 0.85);
        assert_eq!(report.home[&UnitType::Unit3], 0);
        assert_obscured(report.home[&UnitType::Unit4], 60, 0.85);
        assert_obscured(report.returning[&UnitType::Unit1][&4], 150, 0.85);
        assert_eq!(report.training[&UnitType::Unit2][&9], 30);
    }
}

#[test]
fn land_spy_combines_exploration_and_incoming_land() {
    let (mut world, ids, _) = common::build_test_world();
    testutil::perform(&mut world, ids.actor, "land_spy", ids.target, 1).unwrap();

    let op = world
        .info_op(&key(1, ids.target, InfoOpKind::LandSpy))
        .unwrap();
    let InfoOpPayload::LandSpy(report) = &op.payload else {
        panic!("expected land spy payload");
    };
    assert_eq!(report.incoming[&LandType::Forest][&5], 10);
    assert_eq!(report.explored[&LandType::Plain].amount, 250);
    assert_eq!(report.explored[&LandType::Plain].percentage, 100.0);
    // 250 plain - 80 farms - 40 homes
    assert_eq!(report.explored[&LandType::Plain].barren, 130);
}

#[test]
fn survey_dominion_counts_queued_construction() {
    let (mut world, ids, _) = common::build_test_world();
    testutil::perform(&mut world, ids.actor, "survey_dominion", ids.target, 1).unwrap();

    let op = world
        .info_op(&key(1, ids.target, InfoOpKind::SurveyDominion))
        .unwrap();
    let json = serde_json::to_value(&op.payload).unwrap();
    assert_eq!(json["constructed"]["farm"], 80);
    assert_eq!(json["constructing"]["tower"]["7"], 12);
    assert_eq!(json["barren_land"], 130);
}

// ---------------------------------------------------------------------------
// Shared realm records
// ---------------------------------------------------------------------------

#[test]
fn realm_members_share_one_record_per_target_and_type() {
    let (mut world, ids, ally) = common::build_test_world();
    let service = EspionageService::default();

    world.current_time = Tick::new(2, 6);
    service
        .perform_operation(&mut world, ids.actor, "castle_spy", ids.target, &mut NoRng)
        .unwrap();
    let first = world
        .info_op(&key(1, ids.target, InfoOpKind::CastleSpy))
        .cloned()
        .unwrap();

    world.dominion_mut(ids.target).improvements.insert(ImprovementType::Keep, 90_000);
    world.current_time = Tick::new(2, 9);
    service
        .perform_operation(&mut world, ally, "castle_spy", ids.target, &mut NoRng)
        .unwrap();

    let ops: Vec<_> = world.realm_info_ops(1).collect();
    assert_eq!(ops.len(), 1);
    let second = ops[0];
    assert_eq!(second.id, first.id);
    assert_eq!(second.cast_by_dominion_id, ally);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.updated_at, Tick::new(2, 9));
    assert_ne!(second.payload, first.payload);
}

#[test]
fn recasting_unchanged_target_still_refreshes_timestamp() {
    let (mut world, ids, _) = common::build_test_world();
    let service = EspionageService::default();

    service
        .perform_operation(&mut world, ids.actor, "survey_dominion", ids.target, &mut NoRng)
        .unwrap();
    world.current_time = world.current_time.plus_hours(5);
    service
        .perform_operation(&mut world, ids.actor, "survey_dominion", ids.target, &mut NoRng)
        .unwrap();

    let op = world
        .info_op(&key(1, ids.target, InfoOpKind::SurveyDominion))
        .unwrap();
    assert_eq!(op.age(world.current_time), 0);
    assert_eq!(op.updated_at.hours_since(op.created_at), 5);
    assert_eq!(world.info_ops.len(), 1);
}

#[test]
fn casts_within_one_tick_are_ordered_by_revision() {
    let (mut world, ids, ally) = common::build_test_world();
    let service = EspionageService::default();

    service
        .perform_operation(&mut world, ids.actor, "castle_spy", ids.target, &mut NoRng)
        .unwrap();
    service
        .perform_operation(&mut world, ally, "castle_spy", ids.target, &mut NoRng)
        .unwrap();

    let op = world
        .info_op(&key(1, ids.target, InfoOpKind::CastleSpy))
        .unwrap();
    assert_eq!(op.created_at, op.updated_at);
    assert_eq!(op.revision, 2);
    assert_eq!(op.cast_by_dominion_id, ally);
}

#[test]
fn different_realms_keep_separate_records() {
    let (mut world, ids, _) = common::build_test_world();
    // The target's realm spies back on the actor.
    world.dominion_mut(ids.target).military_spies = 100;
    world.dominion_mut(ids.actor).military_spies = 0;

    testutil::perform(&mut world, ids.target, "castle_spy", ids.actor, 1).unwrap();
    world.dominion_mut(ids.actor).military_spies = 250;
    world.dominion_mut(ids.target).military_spies = 0;
    testutil::perform(&mut world, ids.actor, "castle_spy", ids.target, 1).unwrap();

    assert_eq!(world.info_ops.len(), 2);
    assert!(world.info_op(&key(2, ids.actor, InfoOpKind::CastleSpy)).is_some());
    assert!(world.info_op(&key(1, ids.target, InfoOpKind::CastleSpy)).is_some());
}
