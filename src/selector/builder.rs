//! The selector builder: text accumulation plus structural validation.

use std::fmt;

use crate::selector::combinator::Combinator;
use crate::selector::error::SelectorError;
use crate::selector::part::{KindSet, Part};

/// Incrementally assembles a CSS compound/complex selector string.
///
/// Parts are appended with one method per part kind. Before touching the
/// accumulated text, every append checks the two structural rules CSS
/// imposes on compound selectors:
///
/// 1. `element`, `id` and `pseudo_element` may appear at most once.
/// 2. Parts must arrive in canonical order: element, id, class, attribute,
///    pseudo-class, pseudo-element (class, attribute and pseudo-class may
///    repeat).
///
/// Methods consume the builder and hand it back on success, so chains
/// compose with `?`:
///
/// ```
/// use selkit::selector::factory;
///
/// # fn main() -> Result<(), selkit::selector::SelectorError> {
/// let selector = factory::element("a")?
///     .attribute("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.as_css(), "a[href$=\".png\"]:focus");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Accumulated selector text, append-only.
    text: String,
    /// Kinds appended so far, for the uniqueness rule.
    seen: KindSet,
    /// Rank of the highest-ranked kind appended so far, for the order rule.
    rank: u8,
}

impl SelectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector: `div`, `table`.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Element(value.into()))
    }

    /// Append an ID selector: `#main`.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Id(value.into()))
    }

    /// Append a class selector: `.primary`.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Class(value.into()))
    }

    /// Append an attribute selector from its full bracket expression, e.g.
    /// `href$=".png"` becomes `[href$=".png"]`.
    pub fn attribute(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Attribute(value.into()))
    }

    /// Append a pseudo-class: `:hover`.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::PseudoClass(value.into()))
    }

    /// Append a pseudo-element: `::before`.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::PseudoElement(value.into()))
    }

    /// Join two selector expressions with a combinator symbol.
    ///
    /// The symbol must be one of `' '`, `'+'`, `'~'`, `'>'`; anything else
    /// fails with [`SelectorError::InvalidCombinator`]. Both operands are
    /// only read. Their rendered text is appended to this builder as
    /// `left symbol right` with a single space on each side of the symbol,
    /// so a descendant combination renders with three consecutive spaces.
    /// That spacing is part of the output contract and is not normalized.
    pub fn combine(
        mut self,
        left: &SelectorBuilder,
        symbol: char,
        right: &SelectorBuilder,
    ) -> Result<Self, SelectorError> {
        let combinator = Combinator::from_symbol(symbol)
            .ok_or(SelectorError::InvalidCombinator { found: symbol })?;
        self.text.push_str(&format!(
            "{} {} {}",
            left.as_css(),
            combinator,
            right.as_css()
        ));
        Ok(self)
    }

    /// The selector accumulated so far, verbatim.
    ///
    /// Pure read: callable any number of times, never validates.
    pub fn as_css(&self) -> &str {
        &self.text
    }

    /// Validate `part` against the structural rules, then append it.
    fn push(mut self, part: Part) -> Result<Self, SelectorError> {
        let kind = part.kind();
        if kind.is_unique() && self.seen.contains(kind) {
            return Err(SelectorError::Duplicate { kind });
        }
        if kind.rank() < self.rank {
            return Err(SelectorError::OutOfOrder { kind });
        }
        self.seen.insert(kind);
        self.rank = kind.rank();
        self.text.push_str(&part.to_string());
        Ok(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
