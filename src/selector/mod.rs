//! CSS selector construction: parts, combinators, validating builder,
//! stateless entry points.

pub mod builder;
pub mod combinator;
pub mod error;
pub mod factory;
pub mod part;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use part::{Kind, Part};
