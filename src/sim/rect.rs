//! Axis-aligned bounding boxes for actors and grid probes
//!
//! A box covers `[left, right) x [top, bottom)` in tile units, with `y`
//! growing downward. Edges that merely touch do not overlap, so actors can
//! sit flush against each other or against a tile without colliding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A box given by its top-left corner and its extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test (shared edges don't count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Tile rows the box covers, rounding outward
    pub fn row_span(&self) -> (i64, i64) {
        (self.top().floor() as i64, self.bottom().ceil() as i64)
    }

    /// Tile columns the box covers, rounding outward
    pub fn col_span(&self) -> (i64, i64) {
        (self.left().floor() as i64, self.right().ceil() as i64)
    }
}
