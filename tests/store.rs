use std::fs;

use tempfile::TempDir;
use urban_nav::{
    network::RoadNetwork,
    store::{DistanceRecord, DistanceStore},
};

#[test]
fn upserts_are_mirrored_and_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("distances.json");

    let store = DistanceStore::new(&path);
    store.upsert("Aachen", "Bonn", 91).unwrap();
    store.upsert("Bonn", "Cologne", 28).unwrap();

    let record = DistanceStore::new(&path).load();
    assert_eq!(record["Aachen"]["Bonn"], 91);
    assert_eq!(record["Bonn"]["Aachen"], 91);
    assert_eq!(record["Bonn"]["Cologne"], 28);
    assert_eq!(record["Cologne"]["Bonn"], 28);
}

#[test]
fn the_last_written_distance_wins() {
    let dir = TempDir::new().unwrap();
    let store = DistanceStore::new(dir.path().join("distances.json"));

    store.upsert("Aachen", "Bonn", 91).unwrap();
    store.upsert("Bonn", "Aachen", 80).unwrap();

    let record = store.load();
    assert_eq!(record["Aachen"]["Bonn"], 80);
    assert_eq!(record["Bonn"]["Aachen"], 80);
}

#[test]
fn removing_a_road_keeps_the_recorded_distance() {
    let dir = TempDir::new().unwrap();
    let mut network = RoadNetwork::new(DistanceStore::new(dir.path().join("distances.json")));

    network.add_or_update_road("A", "B", 4).unwrap();
    network.add_or_update_road("B", "C", 3).unwrap();
    network.add_or_update_road("A", "B", 9).unwrap();
    network.remove_road("A", "B").unwrap();

    let record = network.store().load();
    assert_eq!(record["A"]["B"], 9);
    assert_eq!(record["B"]["A"], 9);
    assert_eq!(record["B"]["C"], 3);
}

#[test]
fn a_missing_record_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = DistanceStore::new(dir.path().join("missing.json"));

    assert_eq!(store.load(), DistanceRecord::new());
}

#[test]
fn a_corrupt_record_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("distances.json");
    fs::write(&path, "{ this is not json").unwrap();

    let store = DistanceStore::new(&path);
    assert_eq!(store.load(), DistanceRecord::new());

    // and the next upsert overwrites the corrupt document
    store.upsert("Aachen", "Bonn", 91).unwrap();
    assert_eq!(store.load()["Aachen"]["Bonn"], 91);
}

#[test]
fn the_document_is_plain_mirrored_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("distances.json");

    DistanceStore::new(&path).upsert("Aachen", "Bonn", 91).unwrap();

    let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["Aachen"]["Bonn"], 91);
    assert_eq!(document["Bonn"]["Aachen"], 91);
}
