use dominion_espionage::model::*;
use dominion_espionage::scenario::{RivalIds, Scenario};

/// Rivals in realms 1 and 2 plus a realm-1 ally of the actor, with every
/// queue populated on the target.
pub fn build_test_world() -> (World, RivalIds, DominionId) {
    let mut s = Scenario::at(Tick::new(2, 6));
    let ids = s.add_rivals(250, 0);
    let ally = s
        .dominion("Cindermarch", 1)
        .land(LandType::Plain, 260)
        .spies(120)
        .id();
    s.dominion_mut(ids.target)
        .units([800, 240, 0, 60])
        .building(BuildingType::Farm, 80)
        .building(BuildingType::Home, 40)
        .improvement(ImprovementType::Keep, 30_000);
    s.queue_training(ids.target, UnitType::Unit2, 9, 30);
    s.queue_units_returning(ids.target, UnitType::Unit1, 4, 150);
    s.queue_construction(ids.target, BuildingType::Tower, 7, 12);
    s.queue_exploration(ids.target, LandType::Forest, 5, 3);
    s.queue_land_incoming(ids.target, LandType::Forest, 5, 7);
    (s.build(), ids, ally)
}

#[allow(dead_code)]
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
