mod common;

use dominion_espionage::flush::flush_to_jsonl;
use dominion_espionage::model::*;
use dominion_espionage::testutil;

use common::read_lines;

#[test]
fn flush_produces_valid_jsonl_files() {
    let (mut world, ids, ally) = common::build_test_world();
    testutil::perform(&mut world, ids.actor, "castle_spy", ids.target, 1).unwrap();
    testutil::perform(&mut world, ally, "land_spy", ids.target, 2).unwrap();
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&world, dir.path()).unwrap();

    let dominions = read_lines(&dir.path().join("dominions.jsonl"));
    let info_ops = read_lines(&dir.path().join("info_ops.jsonl"));
    let history = read_lines(&dir.path().join("history.jsonl"));

    assert_eq!(dominions.len(), 3, "expected 3 dominions");
    assert_eq!(info_ops.len(), 2, "expected 2 info ops");
    assert_eq!(history.len(), 2, "expected 2 history entries");

    for line in &dominions {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("id").is_some());
        assert!(v.get("spy_strength").is_some());
        assert!(v.get("land").is_some());
    }

    for line in &info_ops {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("type").is_some());
        assert!(v.get("cast_by_dominion_id").is_some());
        assert!(v["payload"].is_object());
        assert!(v["updated_at"]["day"].is_u64());
    }

    for line in &history {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["event"], "perform_espionage_operation");
        assert_eq!(v["changes"][0]["attribute"], "spy_strength");
    }
}

#[test]
fn dominion_lines_deserialize_back() {
    let (world, _, _) = common::build_test_world();
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&world, dir.path()).unwrap();

    let restored: Vec<Dominion> = read_lines(&dir.path().join("dominions.jsonl"))
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let original: Vec<Dominion> = world.dominions.values().cloned().collect();
    assert_eq!(restored, original);
}

#[test]
fn info_op_payload_lines_decode_by_type() {
    let (mut world, ids, _) = common::build_test_world();
    for op in ["barracks_spy", "survey_dominion"] {
        testutil::perform(&mut world, ids.actor, op, ids.target, 3).unwrap();
    }
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&world, dir.path()).unwrap();

    for line in read_lines(&dir.path().join("info_ops.jsonl")) {
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        let kind = InfoOpKind::try_from(v["type"].as_str().unwrap()).unwrap();
        let payload = InfoOpPayload::from_json(kind, v["payload"].clone()).unwrap();
        let stored = world.info_op(&InfoOpKey {
            source_realm_id: 1,
            target_dominion_id: ids.target,
            kind,
        });
        assert_eq!(Some(&payload), stored.map(|op| &op.payload));
    }
}

#[test]
fn flush_creates_missing_directories() {
    let (world, _, _) = common::build_test_world();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("round_1");

    flush_to_jsonl(&world, &nested).unwrap();

    assert!(nested.join("dominions.jsonl").exists());
    assert!(read_lines(&nested.join("history.jsonl")).is_empty());
}
