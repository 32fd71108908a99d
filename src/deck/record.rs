//! Deck edit sessions and the persisted deck record.
//!
//! A `Deck` is the mutable unit of one edit session: metadata plus a
//! `DeckCollection`. It is created empty or hydrated from a persisted
//! record, mutated through the collection, and compiled back into an
//! immutable `DeckRecord` for the persistence collaborator. Compiling
//! snapshots; the live deck keeps editing its own copy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::collection::{DeckCollection, DeckEntry, Partition};
use crate::cards::normalize::{self, resolve_text};

/// Default format for new decks.
pub const DEFAULT_FORMAT: &str = "Standard";

/// Partition keys accepted when hydrating persisted records.
const MAIN_KEYS: &[&str] = &["main", "mainDeck"];
const SIDE_KEYS: &[&str] = &["side", "sideboard"];

/// One deck under edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    /// Persistence identifier; `None` until first saved.
    pub id: Option<String>,
    /// Deck name.
    pub name: String,
    /// Play format, e.g. `"Standard"`.
    pub format: String,
    /// Free-text description.
    pub description: String,
    /// The card entries, main and side.
    pub cards: DeckCollection,
}

impl Deck {
    /// Create an empty deck with the default format.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            format: DEFAULT_FORMAT.to_string(),
            description: String::new(),
            cards: DeckCollection::new(),
        }
    }

    /// Build an edit session from a nullable persisted record.
    ///
    /// `None` yields a fresh empty deck. Otherwise the record's fields
    /// are resolved tolerantly (`main`/`mainDeck`, `side`/`sideboard`),
    /// every entry's card is normalized, and duplicate ids within a
    /// partition merge by summing quantities. Entries persisted with
    /// quantity 0 are dropped.
    #[must_use]
    pub fn hydrate(record: Option<&Value>) -> Self {
        let Some(raw) = record else {
            return Self::new("");
        };

        let mut deck = Self::new(resolve_text(raw, &["name"]));
        deck.id = resolve_id(raw);
        let format = resolve_text(raw, &["format"]);
        if !format.is_empty() {
            deck.format = format;
        }
        deck.description = resolve_text(raw, &["description"]);

        hydrate_partition(&mut deck.cards, raw, MAIN_KEYS, Partition::Main);
        hydrate_partition(&mut deck.cards, raw, SIDE_KEYS, Partition::Side);
        deck
    }

    /// Snapshot this deck as an immutable record for persistence.
    #[must_use]
    pub fn compile(&self) -> DeckRecord {
        DeckRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            format: self.format.clone(),
            description: self.description.clone(),
            main: self.cards.entries(Partition::Main).cloned().collect(),
            side: self.cards.entries(Partition::Side).cloned().collect(),
        }
    }
}

/// The compiled, persistable deck shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckRecord {
    /// Persistence identifier; `None` for a deck not yet created.
    pub id: Option<String>,
    /// Deck name.
    pub name: String,
    /// Play format.
    pub format: String,
    /// Free-text description.
    pub description: String,
    /// Main-deck entries.
    pub main: Vec<DeckEntry>,
    /// Sideboard entries.
    pub side: Vec<DeckEntry>,
}

fn resolve_id(raw: &Value) -> Option<String> {
    match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn hydrate_partition(cards: &mut DeckCollection, raw: &Value, keys: &[&str], partition: Partition) {
    let Some(entries) = keys.iter().find_map(|key| raw.get(key)?.as_array()) else {
        return;
    };
    for entry in entries {
        let quantity = entry
            .get("quantity")
            .and_then(Value::as_u64)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(1);
        let card = normalize::normalize(entry.get("card").unwrap_or(&Value::Null));
        // quantity 0 clamps to a no-op inside add
        cards.add(card, quantity, partition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_deck_defaults() {
        let deck = Deck::new("Burn");
        assert_eq!(deck.name, "Burn");
        assert_eq!(deck.format, DEFAULT_FORMAT);
        assert!(deck.id.is_none());
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_hydrate_none_is_empty_deck() {
        let deck = Deck::hydrate(None);
        assert_eq!(deck.name, "");
        assert_eq!(deck.format, DEFAULT_FORMAT);
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_hydrate_reads_both_key_spellings() {
        let record = json!({
            "id": 7,
            "name": "Izzet Tempo",
            "format": "Modern",
            "mainDeck": [
                { "card": { "id": "a", "name": "Opt" }, "quantity": 4 },
            ],
            "sideboard": [
                { "card": { "id": "b", "name": "Negate" }, "quantity": 2 },
            ],
        });
        let deck = Deck::hydrate(Some(&record));

        assert_eq!(deck.id.as_deref(), Some("7"));
        assert_eq!(deck.format, "Modern");
        assert_eq!(deck.cards.quantity_of("a", Partition::Main), 4);
        assert_eq!(deck.cards.quantity_of("b", Partition::Side), 2);
    }

    #[test]
    fn test_hydrate_merges_duplicate_entries() {
        let record = json!({
            "name": "Dupes",
            "main": [
                { "card": { "id": "a", "name": "Opt" }, "quantity": 2 },
                { "card": { "id": "a", "name": "Opt" }, "quantity": 2 },
            ],
        });
        let deck = Deck::hydrate(Some(&record));
        assert_eq!(deck.cards.len(Partition::Main), 1);
        assert_eq!(deck.cards.quantity_of("a", Partition::Main), 4);
    }

    #[test]
    fn test_hydrate_drops_zero_quantity_entries() {
        let record = json!({
            "name": "Ghost",
            "main": [
                { "card": { "id": "a", "name": "Opt" }, "quantity": 0 },
            ],
        });
        let deck = Deck::hydrate(Some(&record));
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_hydrate_defaults_missing_quantity_to_one() {
        let record = json!({
            "name": "Loose",
            "main": [ { "card": { "id": "a", "name": "Opt" } } ],
        });
        let deck = Deck::hydrate(Some(&record));
        assert_eq!(deck.cards.quantity_of("a", Partition::Main), 1);
    }

    #[test]
    fn test_compile_snapshot_is_detached() {
        let mut deck = Deck::new("Snapshot");
        deck.cards
            .add(crate::cards::Card::new("a", "Opt"), 4, Partition::Main);

        let record = deck.compile();
        deck.cards.remove("a", Partition::Main, true);

        assert_eq!(record.main.len(), 1);
        assert_eq!(record.main[0].quantity, 4);
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_compile_hydrate_round_trip() {
        let mut deck = Deck::new("Round Trip");
        deck.description = "test deck".to_string();
        deck.cards.add(
            crate::cards::Card::new("a", "Opt").with_mana_cost("{U}"),
            4,
            Partition::Main,
        );
        deck.cards
            .add(crate::cards::Card::new("b", "Negate"), 2, Partition::Side);

        let value = serde_json::to_value(deck.compile()).unwrap();
        let back = Deck::hydrate(Some(&value));

        assert_eq!(back.name, deck.name);
        assert_eq!(back.description, deck.description);
        assert_eq!(back.cards, deck.cards);
    }
}
