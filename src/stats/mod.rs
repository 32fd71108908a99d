//! Derived statistics over deck partitions.
//!
//! Everything here is a pure, read-only view: the deck collection is
//! never mutated by aggregation.
//!
//! ## Key Types
//!
//! - `ManaCurve`: fixed-bucket mana-value histogram (land-inclusive and
//!   spells-only variants) plus the average converted cost
//! - `ColorDistribution`: per-color quantity tally with a colorless
//!   bucket; multicolor cards fan out into every one of their colors
//! - `DeckSummary`: the bundle a deck display shows for one partition
//! - `TypeGroup` / `group_by_type`: type-line grouping

pub mod colors;
pub mod curve;
pub mod groups;
pub mod summary;

pub use colors::{ColorDistribution, COLORLESS_CODE};
pub use curve::{ManaCurve, CURVE_LABELS};
pub use groups::{group_by_type, TypeGroup};
pub use summary::DeckSummary;

pub use crate::cards::rarity_rank;
