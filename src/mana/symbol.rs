//! Classification of individual mana symbols.
//!
//! A symbol is the text between one `{` `}` pair in a mana cost, e.g.
//! the `2`, `U`, and `R` of `"{2}{U}{R}"`.

use crate::cards::Color;

/// A single classified mana symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManaSymbol {
    /// Generic cost, e.g. `{2}`. Contributes its numeric value.
    Generic(u32),
    /// Colored symbol, e.g. `{U}`. Contributes 1 and its color.
    Colored(Color),
    /// Variable cost `{X}`. Contributes 1, no color.
    Variable,
    /// Hybrid symbol, e.g. `{W/U}`. Contributes 1 to the cost but is
    /// never tallied into the color set.
    Hybrid,
    /// Anything else. Contributes nothing.
    Unknown,
}

impl ManaSymbol {
    /// Classify the text between one brace pair.
    #[must_use]
    pub fn classify(token: &str) -> ManaSymbol {
        if let Ok(value) = token.parse::<u32>() {
            return ManaSymbol::Generic(value);
        }
        if token.eq_ignore_ascii_case("X") {
            return ManaSymbol::Variable;
        }
        if token.len() == 1 {
            if let Some(color) = token.chars().next().and_then(Color::from_code) {
                return ManaSymbol::Colored(color);
            }
        }
        if token.contains('/') {
            return ManaSymbol::Hybrid;
        }
        ManaSymbol::Unknown
    }

    /// Contribution to the converted cost.
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            ManaSymbol::Generic(value) => value,
            ManaSymbol::Colored(_) | ManaSymbol::Variable | ManaSymbol::Hybrid => 1,
            ManaSymbol::Unknown => 0,
        }
    }

    /// Color contributed to the color set, if any.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            ManaSymbol::Colored(color) => Some(color),
            _ => None,
        }
    }
}
