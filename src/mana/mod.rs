//! Mana cost analysis.
//!
//! Parses the bracketed-token cost notation (`"{2}{U}{R}"`) into a
//! converted mana value and a color set.
//!
//! ## Key Types
//!
//! - `ManaSymbol`: one classified `{…}` token
//! - `ManaValue`: converted cost plus color set
//! - `parse`: total parser over arbitrary cost strings

pub mod cost;
pub mod symbol;

pub use cost::{parse, symbols, ManaValue, Symbols};
pub use symbol::ManaSymbol;
