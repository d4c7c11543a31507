use rand::SeedableRng;
use rand::rngs::SmallRng;

use dominion_espionage::model::{BuildingType, InfoOpKind, LandType, Tick, UnitType};
use dominion_espionage::{EspionageService, InfoOpKey, Scenario};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut scenario = Scenario::at(Tick::new(3, 14));
    let ids = scenario.add_rivals(300, 180);
    scenario
        .dominion_mut(ids.actor)
        .building(BuildingType::ForestHaven, 20);
    scenario
        .dominion_mut(ids.target)
        .units([1_200, 450, 0, 90])
        .building(BuildingType::Farm, 60)
        .building(BuildingType::Home, 30);
    scenario.queue_units_returning(ids.target, UnitType::Unit1, 6, 300);
    scenario.queue_training(ids.target, UnitType::Unit4, 9, 25);
    scenario.queue_exploration(ids.target, LandType::Forest, 5, 12);
    let mut world = scenario.build();

    let service = EspionageService::default();
    let mut rng = SmallRng::seed_from_u64(42);

    for key in ["barracks_spy", "castle_spy", "survey_dominion", "land_spy", "steal_gems"] {
        match service.perform_operation(&mut world, ids.actor, key, ids.target, &mut rng) {
            Ok(result) => eprintln!("{key}: success={} {}", result.success, result.message),
            Err(err) if err.is_fatal() => eprintln!("{key}: internal error: {err}"),
            Err(err) => eprintln!("{key}: rejected: {err}"),
        }
    }

    let actor = world.dominion(ids.actor).expect("actor exists");
    eprintln!(
        "actor after ops: spy_strength={} spies={}",
        actor.spy_strength, actor.military_spies
    );

    let key = InfoOpKey {
        source_realm_id: actor.realm_id,
        target_dominion_id: ids.target,
        kind: InfoOpKind::BarracksSpy,
    };
    if let Some(op) = world.info_op(&key) {
        eprintln!(
            "barracks spy ({}): {}",
            op.updated_at,
            serde_json::to_string_pretty(&op.payload).expect("payload serializes")
        );
    }
    eprintln!("history entries: {}", world.history.len());
}
