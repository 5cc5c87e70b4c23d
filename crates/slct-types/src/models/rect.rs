//! Trigger geometry captured when the menu opens.

use serde::{Deserialize, Serialize};

/// Bounding box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
