//! Mana cost parsing.
//!
//! Costs use the bracketed-token notation `"{2}{U}{R}"`. Parsing is
//! total: text outside braces, unterminated braces, and unrecognized
//! tokens are skipped without error.

use serde::{Deserialize, Serialize};

use super::symbol::ManaSymbol;
use crate::cards::ColorSet;

/// Result of parsing a mana cost: converted value plus color set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaValue {
    /// Converted cost: generic values summed, plus 1 per colored, `X`,
    /// or hybrid symbol.
    pub value: u32,
    /// Colors of the plain colored symbols. Hybrid symbols do not
    /// contribute here.
    pub colors: ColorSet,
}

/// Iterate the classified symbols of a cost string.
///
/// Yields one `ManaSymbol` per `{…}` pair, left to right.
pub fn symbols(cost: &str) -> Symbols<'_> {
    Symbols { rest: cost }
}

/// Iterator over the symbols of a mana cost string.
#[derive(Clone, Debug)]
pub struct Symbols<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Symbols<'a> {
    type Item = ManaSymbol;

    fn next(&mut self) -> Option<ManaSymbol> {
        let open = self.rest.find('{')?;
        let after_open = &self.rest[open + 1..];
        let close = after_open.find('}')?;
        let token = &after_open[..close];
        self.rest = &after_open[close + 1..];
        Some(ManaSymbol::classify(token))
    }
}

/// Parse a mana cost string into its converted value and color set.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::Color;
/// use deckcraft::mana::parse;
///
/// let cost = parse("{2}{U}{R}");
/// assert_eq!(cost.value, 4);
/// assert!(cost.colors.contains(Color::Blue));
/// assert!(cost.colors.contains(Color::Red));
///
/// assert_eq!(parse("").value, 0);
/// ```
#[must_use]
pub fn parse(cost: &str) -> ManaValue {
    let mut result = ManaValue::default();
    for symbol in symbols(cost) {
        result.value += symbol.value();
        if let Some(color) = symbol.color() {
            result.colors.insert(color);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn colors_of(cost: &str) -> Vec<Color> {
        parse(cost).colors.iter().collect()
    }

    #[test]
    fn test_empty_cost() {
        assert_eq!(parse(""), ManaValue::default());
    }

    #[test]
    fn test_generic_plus_colored() {
        let cost = parse("{2}{U}{R}");
        assert_eq!(cost.value, 4);
        assert_eq!(colors_of("{2}{U}{R}"), vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_generic_values_sum() {
        assert_eq!(parse("{2}{3}").value, 5);
    }

    #[test]
    fn test_variable_counts_one() {
        let cost = parse("{X}{R}");
        assert_eq!(cost.value, 2);
        assert_eq!(colors_of("{X}{R}"), vec![Color::Red]);
    }

    #[test]
    fn test_hybrid_costs_one_without_color() {
        let cost = parse("{W/U}{G}");
        assert_eq!(cost.value, 2);
        assert_eq!(colors_of("{W/U}{G}"), vec![Color::Green]);
    }

    #[test]
    fn test_repeated_colors_dedup() {
        let cost = parse("{G}{G}{G}");
        assert_eq!(cost.value, 3);
        assert_eq!(colors_of("{G}{G}{G}"), vec![Color::Green]);
    }

    #[test]
    fn test_malformed_tokens_ignored() {
        assert_eq!(parse("{T}{Q}").value, 0);
        assert_eq!(parse("no braces at all").value, 0);
        // unterminated brace is dropped, earlier symbols still count
        assert_eq!(parse("{1}{R").value, 1);
    }

    #[test]
    fn test_text_between_symbols_skipped() {
        assert_eq!(parse("cost: {1} and {W}").value, 2);
    }
}
