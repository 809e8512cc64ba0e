//! # selkit
//!
//! A fluent, validating builder for CSS compound and complex selectors.
//!
//! selkit assembles selector strings from discrete parts (element, id,
//! class, attribute, pseudo-class, pseudo-element) and joins finished
//! expressions with combinators, enforcing the structural rules CSS
//! imposes on compound selectors as each part is appended: element, id and
//! pseudo-element at most once, and all parts in canonical order.
//!
//! ## Core Systems
//!
//! - **[`selector`]** — Part and combinator model, validating builder,
//!   stateless entry points
//! - **[`geometry`]** — Rect primitive used as the example serialization
//!   payload
//! - **[`json`]** — JSON round-trip helpers over serde_json
//!
//! ## Example
//!
//! ```
//! use selkit::selector::factory;
//!
//! # fn main() -> Result<(), selkit::selector::SelectorError> {
//! let selector = factory::id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.as_css(), "#main.container.editable");
//! # Ok(())
//! # }
//! ```

// Foundation
pub mod geometry;

// Core system
pub mod selector;

// Serialization helpers
pub mod json;
