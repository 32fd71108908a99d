//! Quantity-tracked, two-partition card collection.
//!
//! A `DeckCollection` holds `(Card, quantity)` entries split into the
//! main deck and the sideboard. Each partition keeps at most one entry
//! per card id (adds merge by incrementing, never by appending a
//! duplicate) and no entry ever exists with quantity 0.
//!
//! Partitions are `im::Vector`s, so cloning a collection (for the
//! compile-then-keep-editing lifecycle) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One of the two lists within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// The main deck.
    Main,
    /// The sideboard.
    Side,
}

impl Partition {
    /// The opposite partition.
    #[must_use]
    pub const fn other(self) -> Partition {
        match self {
            Partition::Main => Partition::Side,
            Partition::Side => Partition::Main,
        }
    }
}

/// A card with its copy count. Quantity is always ≥ 1; a count that
/// would reach 0 removes the entry instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// The canonical card.
    pub card: Card,
    /// Number of copies, ≥ 1.
    pub quantity: u32,
}

/// The two-partition collection backing one deck edit session.
///
/// All mutating operations return whether anything changed, so callers
/// that care can tell a merge or decrement apart from a silent no-op on
/// a missing id.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::Card;
/// use deckcraft::deck::{DeckCollection, Partition};
///
/// let mut deck = DeckCollection::new();
/// let bolt = Card::new("bolt", "Lightning Bolt");
///
/// deck.add(bolt.clone(), 1, Partition::Main);
/// deck.add(bolt, 1, Partition::Main);
///
/// // merged into one entry with quantity 2
/// assert_eq!(deck.len(Partition::Main), 1);
/// assert_eq!(deck.count(Partition::Main), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckCollection {
    main: Vector<DeckEntry>,
    side: Vector<DeckEntry>,
}

impl DeckCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries_of(&self, partition: Partition) -> &Vector<DeckEntry> {
        match partition {
            Partition::Main => &self.main,
            Partition::Side => &self.side,
        }
    }

    fn entries_mut(&mut self, partition: Partition) -> &mut Vector<DeckEntry> {
        match partition {
            Partition::Main => &mut self.main,
            Partition::Side => &mut self.side,
        }
    }

    fn index_of(&self, card_id: &str, partition: Partition) -> Option<usize> {
        self.entries_of(partition)
            .iter()
            .position(|entry| entry.card.id == card_id)
    }

    /// Add copies of a card to a partition.
    ///
    /// Merges with an existing entry for the same id or appends a new
    /// one. A `quantity` of 0 is clamped to a no-op rather than creating
    /// an invalid entry. Returns whether the collection changed.
    pub fn add(&mut self, card: Card, quantity: u32, partition: Partition) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.index_of(&card.id, partition) {
            Some(index) => {
                if let Some(entry) = self.entries_mut(partition).get_mut(index) {
                    entry.quantity += quantity;
                }
            }
            None => {
                self.entries_mut(partition).push_back(DeckEntry { card, quantity });
            }
        }
        true
    }

    /// Remove one copy of a card, or the whole entry.
    ///
    /// With `remove_all`, or when only one copy remains, the entry is
    /// deleted; otherwise the quantity is decremented. An id not present
    /// in the partition is a no-op. Returns whether anything changed.
    pub fn remove(&mut self, card_id: &str, partition: Partition, remove_all: bool) -> bool {
        let Some(index) = self.index_of(card_id, partition) else {
            return false;
        };
        let entries = self.entries_mut(partition);
        let last_copy = entries.get(index).map_or(true, |entry| entry.quantity == 1);
        if remove_all || last_copy {
            entries.remove(index);
        } else if let Some(entry) = entries.get_mut(index) {
            entry.quantity -= 1;
        }
        true
    }

    /// Move the full quantity of a card between partitions.
    ///
    /// Merges with any existing entry in the destination by summing
    /// quantities. An id not present in `from` is a no-op and creates
    /// nothing in `to`. Returns whether anything moved.
    pub fn move_card(&mut self, card_id: &str, from: Partition, to: Partition) -> bool {
        if from == to {
            return false;
        }
        let Some(index) = self.index_of(card_id, from) else {
            return false;
        };
        let entry = self.entries_mut(from).remove(index);
        self.add(entry.card, entry.quantity, to)
    }

    /// Iterate the entries of a partition in insertion order.
    pub fn entries(&self, partition: Partition) -> impl Iterator<Item = &DeckEntry> {
        self.entries_of(partition).iter()
    }

    /// Number of distinct entries in a partition.
    #[must_use]
    pub fn len(&self, partition: Partition) -> usize {
        self.entries_of(partition).len()
    }

    /// Displayed card count of a partition: the sum of quantities.
    #[must_use]
    pub fn count(&self, partition: Partition) -> u32 {
        self.entries(partition).map(|entry| entry.quantity).sum()
    }

    /// Card count across both partitions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.count(Partition::Main) + self.count(Partition::Side)
    }

    /// Copies of a card in a partition; 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, card_id: &str, partition: Partition) -> u32 {
        self.index_of(card_id, partition)
            .and_then(|index| self.entries_of(partition).get(index))
            .map_or(0, |entry| entry.quantity)
    }

    /// Whether a partition holds the card.
    #[must_use]
    pub fn contains(&self, card_id: &str, partition: Partition) -> bool {
        self.index_of(card_id, partition).is_some()
    }

    /// True when both partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.side.is_empty()
    }
}
