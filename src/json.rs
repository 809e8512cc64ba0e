//! JSON round-trip helpers.
//!
//! Thin wrappers over [`serde_json`] with the target shape expressed as
//! the type parameter: `from_json::<Rect>(text)` hands back a value with
//! [`Rect`](crate::geometry::Rect)'s behavior attached. They surface
//! [`serde_json::Error`] unchanged and never touch the selector system.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize `value` to its canonical JSON text.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Parse JSON `text` back into a `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text)
}
