//! Measurable UI element port for layout diagnostics.

use serde::{Deserialize, Serialize};

/// On-screen bounding rectangle of a UI element.
///
/// Coordinates are relative to the top-left of the screen, matching what
/// browser hosts report for client rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A UI element whose on-screen rectangle can be read.
pub trait ScreenElement {
    /// Current bounding rectangle of the element.
    fn bounding_rect(&self) -> BoundingRect;
}
