//! Deck collections, edit sessions, and the persisted record.
//!
//! ## Key Types
//!
//! - `Partition`: main deck vs. sideboard
//! - `DeckEntry`: a card with its copy count (always ≥ 1)
//! - `DeckCollection`: the quantity-tracked two-partition multiset
//! - `Deck`: one edit session (metadata + collection)
//! - `DeckRecord`: the immutable compiled shape handed to persistence

pub mod collection;
pub mod record;

pub use collection::{DeckCollection, DeckEntry, Partition};
pub use record::{Deck, DeckRecord, DEFAULT_FORMAT};
