//! Geometry primitives: Rect.
//!
//! [`Rect`] is the canonical example payload for the [`json`](crate::json)
//! round-trip helpers. It takes no part in selector construction.

use serde::{Deserialize, Serialize};

/// A width/height pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect.
    pub const ZERO: Rect = Rect {
        width: 0,
        height: 0,
    };

    /// Create a new rect.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total area (width * height).
    #[inline]
    pub const fn area(self) -> i32 {
        self.width * self.height
    }
}
