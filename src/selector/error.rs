//! Errors raised while assembling a selector.

use crate::selector::part::Kind;

/// Errors from selector assembly.
///
/// Every variant is fatal at the point of call: the failing operation
/// consumes the builder and appends nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    Duplicate { kind: Kind },
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element")]
    OutOfOrder { kind: Kind },
    #[error("combinator must be one of ' ', '+', '~', '>', got {found:?}")]
    InvalidCombinator { found: char },
}
