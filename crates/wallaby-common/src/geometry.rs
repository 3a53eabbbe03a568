//! Plain geometric value objects.
//!
//! These are deliberately dumb data carriers: no validation, no unit
//! handling. They exist so callers have a concrete serde-enabled shape to
//! feed through the [`crate::json`] round-trip helpers.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// Width and height are accepted as-is; negative or non-finite values are
/// the caller's problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the rectangle, `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}
