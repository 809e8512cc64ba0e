//! Combinators: the structural relations between compound selectors.

use std::fmt;

/// A CSS combinator joining two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
    /// Next-sibling combinator: `A + B`.
    NextSibling,
    /// Subsequent-sibling combinator: `A ~ B`.
    SubsequentSibling,
}

impl Combinator {
    /// Map a combinator symbol to its variant.
    ///
    /// Returns `None` for any character outside `' '`, `'>'`, `'+'`, `'~'`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Combinator::Descendant),
            '>' => Some(Combinator::Child),
            '+' => Some(Combinator::NextSibling),
            '~' => Some(Combinator::SubsequentSibling),
            _ => None,
        }
    }

    /// The single-character symbol for this combinator.
    pub const fn symbol(self) -> char {
        match self {
            Combinator::Descendant => ' ',
            Combinator::Child => '>',
            Combinator::NextSibling => '+',
            Combinator::SubsequentSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
