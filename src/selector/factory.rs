//! Stateless entry points that start a fresh builder per call.
//!
//! Each function constructs a new [`SelectorBuilder`] and forwards its
//! arguments to the matching builder operation, so independent call chains
//! never share a builder. The part functions cannot actually fail on a
//! fresh builder; they keep the `Result` return so every link in a chain
//! reads the same.

use crate::selector::builder::SelectorBuilder;
use crate::selector::error::SelectorError;

/// Start a selector with a type selector.
pub fn element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an ID selector.
pub fn id(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class selector.
pub fn class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute selector.
pub fn attribute(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attribute(value)
}

/// Start a selector with a pseudo-class.
pub fn pseudo_class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element.
pub fn pseudo_element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Join two selector expressions into a new builder.
pub fn combine(
    left: &SelectorBuilder,
    symbol: char,
    right: &SelectorBuilder,
) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().combine(left, symbol, right)
}
