//! # deckcraft
//!
//! Deck composition and statistics engine for trading-card catalogs.
//!
//! The crate is the in-memory core of a deck builder: it normalizes
//! heterogeneous card records into one canonical shape, maintains a
//! quantity-tracked main/sideboard collection with consistent
//! add/remove/move semantics, and derives the read-only views a deck
//! display needs (mana curve, color distribution, rarity order, sorted
//! and filtered card lists).
//!
//! ## Design Principles
//!
//! 1. **Total over arbitrary input**: normalization and mana-cost
//!    parsing never fail. Unrecognizable fields default; malformed
//!    symbols are skipped. There is no error path out of this engine.
//!
//! 2. **One canonical shape**: external records are normalized exactly
//!    once, at the boundary. Everything downstream reads `Card` fields.
//!
//! 3. **Mutation in one place**: only `DeckCollection` operations touch
//!    deck state. Statistics and sort/filter are pure projections.
//!
//! 4. **Cheap snapshots**: partitions use `im` persistent vectors, so
//!    compiling a deck for persistence while an edit session continues
//!    is an O(1) clone.
//!
//! ## Modules
//!
//! - `cards`: canonical `Card`, colors, and the normalizer
//! - `mana`: bracketed-token mana cost parsing (`"{2}{U}{R}"`)
//! - `deck`: the two-partition collection, edit sessions, persistence record
//! - `stats`: mana curve, color distribution, summaries, type groups
//! - `view`: stable sorting and conjunctive filtering

pub mod cards;
pub mod deck;
pub mod mana;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use crate::cards::{normalize, normalize_all, rarity_rank, Card, Color, ColorSet};

pub use crate::mana::{parse, ManaSymbol, ManaValue};

pub use crate::deck::{Deck, DeckCollection, DeckEntry, DeckRecord, Partition};

pub use crate::stats::{group_by_type, ColorDistribution, DeckSummary, ManaCurve, TypeGroup};

pub use crate::view::{filtered, sorted, CardFilter, SortConfig, SortDirection, SortKey};
