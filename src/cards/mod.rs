//! Canonical card model and normalization.
//!
//! ## Key Types
//!
//! - `Card`: the one canonical card shape, immutable once normalized
//! - `Color` / `ColorSet`: WUBRG color codes and ordered color sets
//! - `normalize`: total mapping from arbitrary external records to `Card`
//! - `rarity_rank`: the scarcity-tier total order shared by statistics
//!   and sorting

pub mod card;
pub mod color;
pub mod normalize;

pub use card::{rarity_rank, Card};
pub use color::{Color, ColorSet};
pub use normalize::{normalize, normalize_all};
