//! Integration tests for dashboard state persistence.
//!
//! Exercises the full path the TUI uses: a `ConfigStore` over a
//! `FileStorage` backend, across process-restart boundaries simulated by
//! reopening the state file.

use std::fs;

use churchafrica_dashboard::store::{ConfigStore, FileStorage, CONFIG_KEY};
use churchafrica_dashboard::{CardsPerRow, DashboardConfig, Density, RowCount};

fn custom_config() -> DashboardConfig {
    DashboardConfig {
        cards_per_row: CardsPerRow::Four,
        row_count: RowCount::One,
        density: Density::Compact,
        visible_cards: vec![
            "monthly-giving".to_string(),
            "total-members".to_string(),
            "upcoming-events".to_string(),
        ],
    }
}

#[test]
fn layout_survives_reopen() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");
    let config = custom_config();

    {
        let storage = FileStorage::open(path.clone()).expect("open storage");
        let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
        store.update(config.clone());
    }

    let storage = FileStorage::open(path).expect("reopen storage");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    assert_eq!(store.load(), config);
}

#[test]
fn tour_sentinel_survives_reopen() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");

    {
        let storage = FileStorage::open(path.clone()).expect("open storage");
        let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
        assert!(!store.tour_seen());
        store.mark_tour_seen();
    }

    let storage = FileStorage::open(path).expect("reopen storage");
    let store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    assert!(store.tour_seen(), "tour dismissal must persist");
}

#[test]
fn corrupt_state_file_degrades_to_starter_layout() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");
    fs::write(&path, "{not valid json").expect("write corrupt file");

    let storage = FileStorage::open(path).expect("open must not fail on corrupt content");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    assert_eq!(store.load(), DashboardConfig::default());
}

#[test]
fn corrupt_config_entry_in_valid_map_degrades_to_starter_layout() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");
    let map = format!("{{\"{CONFIG_KEY}\": \"{{not valid json\"}}");
    fs::write(&path, map).expect("write state file");

    let storage = FileStorage::open(path).expect("open storage");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    assert_eq!(store.load(), DashboardConfig::default());
}

#[test]
fn reset_clears_persisted_layout() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");

    {
        let storage = FileStorage::open(path.clone()).expect("open storage");
        let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
        store.update(custom_config());
        store.reset();
    }

    let storage = FileStorage::open(path).expect("reopen storage");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    assert_eq!(store.load(), DashboardConfig::default());
}

#[test]
fn state_file_holds_json_config_under_the_storage_key() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");

    let storage = FileStorage::open(path.clone()).expect("open storage");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    store.update(custom_config());

    let content = fs::read_to_string(&path).expect("state file exists");
    let map: serde_json::Value = serde_json::from_str(&content).expect("valid JSON map");
    let raw_config = map[CONFIG_KEY].as_str().expect("config stored as a string");
    let stored: serde_json::Value = serde_json::from_str(raw_config).expect("nested JSON");
    assert_eq!(stored["cardsPerRow"], 4);
    assert_eq!(stored["visibleCards"][0], "monthly-giving");
}

#[test]
fn capacity_shrink_keeps_hidden_tail_across_restart() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("state.json");

    {
        let storage = FileStorage::open(path.clone()).expect("open storage");
        let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
        // Shrink the grid below the six-card starter selection
        let mut config = store.config().clone();
        config.cards_per_row = CardsPerRow::Two;
        config.row_count = RowCount::One;
        store.update(config);
    }

    let storage = FileStorage::open(path).expect("reopen storage");
    let mut store = ConfigStore::open(Box::new(storage), DashboardConfig::default());
    let config = store.load();
    assert_eq!(
        config.visible_cards.len(),
        6,
        "shrinking capacity must not drop stored cards"
    );
    assert_eq!(churchafrica_dashboard::layout::display_cards(&config).len(), 2);
}
