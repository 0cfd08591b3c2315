use chrono::Utc;
use tempfile::TempDir;

use leaper_tour::core::tile::Tile;
use leaper_tour::geometry::{Direction, Rotation};
use leaper_tour::history::select_default;
use leaper_tour::store::{config_key, ResultsStore, SearchRecord};

fn record(iterations: u64, success: bool) -> SearchRecord {
    SearchRecord {
        iterations,
        success,
        path: vec!["0,0".to_string()],
        time: Utc::now(),
    }
}

#[test]
fn config_key_matches_the_wire_format() {
    assert_eq!(
        config_key(Direction::N, Rotation::Clockwise),
        "N:clockwise"
    );
    assert_eq!(
        config_key(Direction::SW, Rotation::Anticlockwise),
        "SW:anticlockwise"
    );
}

#[test]
fn oracle_defaults_to_north_clockwise_without_records() {
    let store = ResultsStore::default();
    let pick = select_default(Tile::new(0, 0), &store, 1_000_000);
    assert_eq!(pick, (Direction::N, Rotation::Clockwise));
}

#[test]
fn oracle_picks_the_cheapest_recorded_configuration() {
    let tile = Tile::new(0, 0);
    let mut store = ResultsStore::default();
    store.insert(tile, Direction::N, Rotation::Clockwise, record(500, false));
    store.insert(tile, Direction::S, Rotation::Clockwise, record(200, true));

    let pick = select_default(tile, &store, 1_000_000);
    assert_eq!(pick, (Direction::S, Rotation::Clockwise));
}

#[test]
fn oracle_ranks_missing_records_at_the_budget() {
    let tile = Tile::new(3, 3);
    let mut store = ResultsStore::default();
    store.insert(tile, Direction::N, Rotation::Clockwise, record(500, false));
    store.insert(tile, Direction::S, Rotation::Clockwise, record(200, false));

    // With a budget below every recorded count, the first untried
    // combination in ring order wins.
    let pick = select_default(tile, &store, 100);
    assert_eq!(pick, (Direction::N, Rotation::Anticlockwise));
}

#[test]
fn oracle_ignores_records_for_other_tiles() {
    let mut store = ResultsStore::default();
    store.insert(
        Tile::new(5, 5),
        Direction::E,
        Rotation::Anticlockwise,
        record(10, true),
    );
    let pick = select_default(Tile::new(0, 0), &store, 1_000_000);
    assert_eq!(pick, (Direction::N, Rotation::Clockwise));
}

#[test]
fn missing_file_loads_as_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = ResultsStore::load(&dir.path().join("absent.json")).unwrap();
    assert!(store
        .record(Tile::new(0, 0), Direction::N, Rotation::Clockwise)
        .is_none());
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let tile = Tile::new(2, 7);

    let mut store = ResultsStore::default();
    store.insert(tile, Direction::NW, Rotation::Anticlockwise, record(42, true));
    store.save(&path).unwrap();

    let loaded = ResultsStore::load(&path).unwrap();
    let rec = loaded
        .record(tile, Direction::NW, Rotation::Anticlockwise)
        .unwrap();
    assert_eq!(rec.iterations, 42);
    assert!(rec.success);
}

#[test]
fn save_merges_with_records_already_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");

    let mut first = ResultsStore::default();
    first.insert(
        Tile::new(5, 5),
        Direction::E,
        Rotation::Clockwise,
        record(300, false),
    );
    first.save(&path).unwrap();

    // A fresh store writing a different key must not clobber the old one.
    let mut second = ResultsStore::default();
    second.insert(
        Tile::new(0, 0),
        Direction::N,
        Rotation::Clockwise,
        record(99, true),
    );
    second.save(&path).unwrap();

    let merged = ResultsStore::load(&path).unwrap();
    assert!(merged
        .record(Tile::new(5, 5), Direction::E, Rotation::Clockwise)
        .is_some());
    assert!(merged
        .record(Tile::new(0, 0), Direction::N, Rotation::Clockwise)
        .is_some());
}

#[test]
fn newer_record_for_the_same_key_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let tile = Tile::new(1, 1);

    let mut store = ResultsStore::default();
    store.insert(tile, Direction::N, Rotation::Clockwise, record(900, false));
    store.save(&path).unwrap();

    store.insert(tile, Direction::N, Rotation::Clockwise, record(120, true));
    store.save(&path).unwrap();

    let loaded = ResultsStore::load(&path).unwrap();
    let rec = loaded
        .record(tile, Direction::N, Rotation::Clockwise)
        .unwrap();
    assert_eq!(rec.iterations, 120);
    assert!(rec.success);
}
