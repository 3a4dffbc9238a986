//! End-to-end properties of the store, layout, and reorder engines.

use crate::layout::{self, LayoutError};
use crate::registry::{CardRegistry, STARTER_CARD_IDS};
use crate::reorder::{self, CardOrder};
use crate::store::{ConfigStore, MemoryStorage, StorageBackend, CONFIG_KEY};
use crate::{CardsPerRow, DashboardConfig, Density, RowCount};

fn memory_store() -> ConfigStore {
    ConfigStore::open(Box::new(MemoryStorage::new()), DashboardConfig::default())
}

// ---------------------------------------------------------------------------
// Store round-trips
// ---------------------------------------------------------------------------

#[test]
fn load_after_save_is_identity_for_valid_configs() {
    let samples = [
        DashboardConfig::default(),
        DashboardConfig {
            cards_per_row: CardsPerRow::Two,
            row_count: RowCount::One,
            density: Density::Compact,
            visible_cards: vec!["total-members".to_string()],
        },
        DashboardConfig {
            cards_per_row: CardsPerRow::Four,
            row_count: RowCount::Two,
            density: Density::Comfortable,
            visible_cards: Vec::new(),
        },
    ];
    for config in samples {
        let mut store = memory_store();
        store.update(config.clone());
        assert_eq!(store.load(), config, "round-trip changed the config");
    }
}

#[test]
fn fresh_store_loads_starter_layout_with_first_six_registry_ids() {
    let mut store = memory_store();
    let config = store.load();
    assert_eq!(config.cards_per_row, CardsPerRow::Three);
    assert_eq!(config.row_count, RowCount::Two);
    assert_eq!(config.density, Density::Standard);
    assert_eq!(config.visible_cards, STARTER_CARD_IDS.to_vec());
}

#[test]
fn corrupt_stored_value_falls_back_without_error() {
    let mut backend = MemoryStorage::new();
    backend
        .set(CONFIG_KEY, "{not valid json")
        .expect("set never fails");
    let mut store = ConfigStore::open(Box::new(backend), DashboardConfig::default());
    assert_eq!(store.load(), DashboardConfig::default());
}

// ---------------------------------------------------------------------------
// Capacity invariant through the store
// ---------------------------------------------------------------------------

#[test]
fn toggle_sequences_through_store_never_exceed_capacity() {
    let registry = CardRegistry::builtin();
    let mut store = memory_store();

    // Shrink to a 2x1 grid while six cards are selected
    let mut config = store.config().clone();
    config.cards_per_row = CardsPerRow::Two;
    config.row_count = RowCount::One;
    store.update(config);

    // Every card still removable; inserts rejected until under capacity
    for card in registry.cards() {
        let current = store.config().clone();
        match layout::toggle_card(&current, card.id) {
            Ok(updated) => {
                store.update(updated);
            }
            Err(LayoutError::MaxSlotsExceeded { capacity }) => {
                assert_eq!(capacity, 2);
                assert!(
                    !current.visible_cards.contains(&card.id.to_string()),
                    "removal must never be rejected"
                );
            }
        }
        let after = store.config();
        // The pre-existing oversize selection shrinks as cards toggle
        // off; inserts can never grow it past capacity again once under
        if after.visible_cards.len() <= 2 {
            assert!(after.visible_cards.len() <= layout::visible_slots(after));
        }
    }
}

#[test]
fn capacity_rejection_leaves_persisted_state_untouched() {
    let mut store = memory_store();
    let mut config = store.config().clone();
    config.cards_per_row = CardsPerRow::Two;
    config.row_count = RowCount::One;
    config.visible_cards = vec!["total-members".to_string(), "weekly-attendance".to_string()];
    store.update(config.clone());

    let err = layout::toggle_card(store.config(), "monthly-giving")
        .expect_err("third card exceeds the 2x1 grid");
    assert_eq!(err, LayoutError::MaxSlotsExceeded { capacity: 2 });
    assert_eq!(store.load(), config, "nothing was persisted");
}

// ---------------------------------------------------------------------------
// Reorder properties over persisted state
// ---------------------------------------------------------------------------

#[test]
fn committed_moves_preserve_set_membership() {
    let mut store = memory_store();
    let before: Vec<String> = store.config().visible_cards.clone();

    let mut config = store.config().clone();
    config.visible_cards = reorder::move_card(&config.visible_cards, 0, 4);
    store.update(config);

    let after = store.load().visible_cards;
    assert_eq!(after.len(), before.len());
    for id in &before {
        assert!(after.contains(id));
    }
}

#[test]
fn move_then_inverse_round_trips_through_storage() {
    let mut store = memory_store();
    let original = store.config().clone();

    let mut moved = store.config().clone();
    moved.visible_cards = reorder::move_card(&moved.visible_cards, 1, 5);
    store.update(moved);

    let mut restored = store.load();
    restored.visible_cards = reorder::move_card(&restored.visible_cards, 5, 1);
    store.update(restored);

    assert_eq!(store.load(), original);
}

#[test]
fn preview_order_reconciles_with_store_changes() {
    let mut store = memory_store();
    let mut order = CardOrder::new(&store.config().visible_cards);

    // Drag preview rearranges locally
    order.move_card(0, 3);
    let preview = order.ids().to_vec();

    // A toggle lands in the store; resync keeps the preview arrangement
    let updated = layout::toggle_card(store.config(), "total-members").expect("removal");
    store.update(updated);
    order.resync(&store.config().visible_cards);

    let expected: Vec<String> = preview
        .into_iter()
        .filter(|id| id != "total-members")
        .collect();
    assert_eq!(order.ids(), expected.as_slice());
}

// ---------------------------------------------------------------------------
// Recommended preset
// ---------------------------------------------------------------------------

#[test]
fn preset_fits_capacity_for_every_grid_size() {
    let registry = CardRegistry::builtin();
    for cards_per_row in [CardsPerRow::Two, CardsPerRow::Three, CardsPerRow::Four] {
        for row_count in [RowCount::One, RowCount::Two] {
            let config = DashboardConfig {
                cards_per_row,
                row_count,
                density: Density::Standard,
                visible_cards: vec!["volunteer-hours".to_string()],
            };
            let updated = layout::apply_ai_preset(&config, &registry);
            assert!(updated.visible_cards.len() <= layout::visible_slots(&config));
            assert!(updated
                .visible_cards
                .iter()
                .all(|id| registry.get(id).is_some_and(|card| card.recommended)));
        }
    }
}

#[test]
fn preset_result_survives_persistence() {
    let registry = CardRegistry::builtin();
    let mut store = memory_store();
    let updated = layout::apply_ai_preset(store.config(), &registry);
    store.update(updated.clone());
    assert_eq!(store.load(), updated);
}
