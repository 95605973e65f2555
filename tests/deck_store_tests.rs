//! Deck store integration tests.
//!
//! These tests drive `DeckStore` the way a deck-building page does:
//! - Adding and removing copies under the configured limits
//! - Saving complete decks into the bounded saved-deck log
//! - Restoring the newest saved deck when a new store starts

use std::collections::BTreeMap;

use deck_builder::cards::Card;
use deck_builder::core::{DeckConfig, DeckError};
use deck_builder::deck::DeckStore;
use deck_builder::storage::{FileStorage, MemoryStorage, SavedDeckLog, Storage};
use proptest::prelude::*;

fn card(id: &str) -> Card {
    Card::new(id, format!("Card {id}"))
}

fn new_store(config: DeckConfig) -> DeckStore<MemoryStorage> {
    DeckStore::new(config, MemoryStorage::new()).expect("valid config")
}

/// Add `per_card_limit` copies of fresh cards until the deck is complete.
fn fill<S: Storage>(store: &mut DeckStore<S>, prefix: &str) {
    let mut next = 0;
    while !store.is_complete() {
        let c = card(&format!("{prefix}-{next}"));
        while store.count_of(c.id.as_str()) < store.config().per_card_limit && !store.is_complete() {
            store.add_card(&c).expect("room in deck");
        }
        next += 1;
    }
}

fn multiset<S: Storage>(store: &DeckStore<S>) -> BTreeMap<String, u32> {
    store
        .entries()
        .map(|e| (e.card.id.to_string(), e.count))
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Third copy of "A" is rejected; filling to 20 and saving "MyDeck" writes
/// one saved deck with 20 copies as the newest entry.
#[test]
fn test_standard_scenario() {
    let mut store = new_store(DeckConfig::standard());
    let a = card("A");

    store.add_card(&a).unwrap();
    store.add_card(&a).unwrap();
    assert_eq!(store.count_of("A"), 2);
    assert_eq!(store.deck().len(), 1);

    let before = store.deck().clone();
    let err = store.add_card(&a).unwrap_err();
    assert!(matches!(err, DeckError::CopyLimitExceeded { ref card_id, limit: 2 } if card_id == "A"));
    assert_eq!(store.deck(), &before);

    fill(&mut store, "filler");
    assert_eq!(store.total_cards(), 20);

    store.set_name("MyDeck");
    store.save().unwrap();

    let log = SavedDeckLog::new("decks", 10);
    let saved = log.read(store.storage());
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "MyDeck");
    assert_eq!(saved[0].total_cards(), 20);
}

/// Saving an empty, unnamed deck reports the missing name and writes
/// nothing.
#[test]
fn test_save_empty_unnamed_deck() {
    let mut store = new_store(DeckConfig::standard());

    assert!(matches!(store.save(), Err(DeckError::EmptyName)));
    assert_eq!(store.storage().write_count(), 0);
    assert_eq!(store.storage().get_item("decks").unwrap(), None);
}

/// Named but incomplete decks are rejected with the current total.
#[test]
fn test_save_incomplete_deck() {
    let mut store = new_store(DeckConfig::standard());
    store.set_name("Almost");
    fill(&mut store, "x");
    store.remove_one_copy("x-0");

    match store.save() {
        Err(DeckError::IncompleteDeck { total, required }) => {
            assert_eq!(total, 19);
            assert_eq!(required, 20);
        }
        other => panic!("expected IncompleteDeck, got {other:?}"),
    }
    assert_eq!(store.storage().write_count(), 0);
}

/// A full deck rejects any further card, even a new one.
#[test]
fn test_deck_full() {
    let mut store = new_store(DeckConfig::standard());
    fill(&mut store, "x");

    let err = store.add_card(&card("new")).unwrap_err();
    assert!(matches!(err, DeckError::DeckFull { max: 20 }));
    assert_eq!(err.to_string(), "deck is full (20 cards maximum)");
    assert_eq!(store.count_of("new"), 0);
}

/// The 60/4 preset allows four copies and sixty cards.
#[test]
fn test_constructed_limits() {
    let mut store = new_store(DeckConfig::constructed());
    let c = card("c");
    for _ in 0..4 {
        store.add_card(&c).unwrap();
    }
    assert!(matches!(
        store.add_card(&c),
        Err(DeckError::CopyLimitExceeded { limit: 4, .. })
    ));

    fill(&mut store, "x");
    assert_eq!(store.total_cards(), 60);
    store.set_name("Sixty");
    assert!(store.can_save());
}

/// Removing a card that is not in the deck changes nothing.
#[test]
fn test_remove_absent_card() {
    let mut store = new_store(DeckConfig::standard());
    store.add_card(&card("a")).unwrap();

    let before = store.deck().clone();
    store.remove_one_copy("missing");
    assert_eq!(store.deck(), &before);
}

// =============================================================================
// Persistence
// =============================================================================

/// The log keeps only the newest `max_saved_decks` entries.
#[test]
fn test_log_capacity() {
    let config = DeckConfig::standard().with_max_saved_decks(3);
    let mut store = new_store(config);
    fill(&mut store, "x");

    for i in 0..5 {
        store.set_name(format!("Deck {i}"));
        store.save().unwrap();
    }

    let names: Vec<_> = store.saved_decks().into_iter().map(|d| d.name).collect();
    assert_eq!(names, ["Deck 4", "Deck 3", "Deck 2"]);
}

/// Saving, then starting a new store on the same storage, reproduces the
/// name and entries.
#[test]
fn test_hydration_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = DeckStore::new(DeckConfig::standard(), FileStorage::new(dir.path()).unwrap()).unwrap();
    store.add_card(&card("lead")).unwrap();
    fill(&mut store, "x");
    store.set_name("On Disk");
    store.save().unwrap();
    let expected = multiset(&store);
    drop(store);

    let restored = DeckStore::new(DeckConfig::standard(), FileStorage::new(dir.path()).unwrap()).unwrap();
    assert_eq!(restored.name(), "On Disk");
    assert_eq!(multiset(&restored), expected);
    assert_eq!(
        restored.entries().next().map(|e| e.card.id.as_str()),
        Some("lead")
    );
}

/// Corrupt data in the slot is ignored and a later save replaces it.
#[test]
fn test_corrupt_storage_recovers() {
    let storage = MemoryStorage::new().with_item("decks", "]]not json[[");
    let mut store = DeckStore::new(DeckConfig::standard(), storage).unwrap();

    assert!(store.deck().is_empty());
    assert_eq!(store.name(), "");

    fill(&mut store, "x");
    store.set_name("Recovered");
    store.save().unwrap();
    assert_eq!(store.saved_decks().len(), 1);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Add(usize),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..12).prop_map(Op::Add),
        1 => (0usize..12).prop_map(Op::Remove),
    ]
}

fn config_strategy() -> impl Strategy<Value = DeckConfig> {
    prop_oneof![
        Just(DeckConfig::standard()),
        Just(DeckConfig::constructed()),
        (1u32..10, 1u32..4).prop_map(|(size, limit)| DeckConfig::new(size.max(limit), limit)),
    ]
}

proptest! {
    /// No sequence of edits breaks the deck-size or copy limits.
    #[test]
    fn prop_limits_hold(config in config_strategy(), ops in prop::collection::vec(op_strategy(), 0..200)) {
        let cards: Vec<_> = (0..12).map(|i| card(&i.to_string())).collect();
        let mut store = new_store(config.clone());

        for op in ops {
            match op {
                Op::Add(i) => {
                    let before = store.deck().clone();
                    if store.add_card(&cards[i]).is_err() {
                        prop_assert_eq!(store.deck(), &before);
                    }
                }
                Op::Remove(i) => store.remove_one_copy(cards[i].id.as_str()),
            }

            prop_assert!(store.total_cards() <= config.max_deck_size);
            prop_assert!(store
                .entries()
                .all(|e| e.count >= 1 && e.count <= config.per_card_limit));
        }
    }

    /// Adding one copy of an absent card and removing it restores the deck.
    #[test]
    fn prop_remove_inverts_add(ops in prop::collection::vec(0usize..8, 0..19)) {
        let mut store = new_store(DeckConfig::standard());
        for i in ops {
            let _ = store.add_card(&card(&i.to_string()));
        }

        let before = store.deck().clone();
        store.add_card(&card("absent")).unwrap();
        store.remove_one_copy("absent");
        prop_assert_eq!(store.deck(), &before);
    }

    /// Save then re-hydrate reproduces name and entry multiset.
    #[test]
    fn prop_hydration_idempotent(
        ops in prop::collection::vec(0usize..6, 0..20),
        name in "[A-Za-z][A-Za-z0-9 ]{0,15}",
    ) {
        let mut store = new_store(DeckConfig::standard());
        for i in ops {
            let _ = store.add_card(&card(&i.to_string()));
        }
        fill(&mut store, "top");
        store.set_name(name.clone());
        store.save().unwrap();
        let expected = multiset(&store);

        let restored = DeckStore::new(DeckConfig::standard(), store.into_storage()).unwrap();
        prop_assert_eq!(restored.name(), name.as_str());
        prop_assert_eq!(multiset(&restored), expected);
    }
}
