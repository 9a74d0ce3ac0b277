//! Static tile grid and obstacle queries
//!
//! The grid is indexed `[row][col]`. Rows may be short; missing cells read as
//! empty. The grid never changes after the level is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// What a grid cell (or the area outside the grid) blocks with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell contents; out-of-range reads as empty
    pub fn cell(&self, row: usize, col: usize) -> Option<Obstacle> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// What blocks a box of `size` placed at `pos`
    ///
    /// Leaving the grid through the left, right or top edge hits a wall,
    /// dropping out of the bottom hits lava. Inside the grid, the first
    /// non-empty cell the box touches wins, scanning rows top to bottom.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        let probe = Rect::new(pos, size);

        if probe.left() < 0.0 || probe.top() < 0.0 || probe.right() > self.width as f32 {
            return Some(Obstacle::Wall);
        }
        if probe.bottom() > self.height() as f32 {
            return Some(Obstacle::Lava);
        }

        let (row_start, row_end) = probe.row_span();
        let (col_start, col_end) = probe.col_span();
        for row in row_start..row_end {
            for col in col_start..col_end {
                if let Some(obstacle) = self.cell(row as usize, col as usize) {
                    return Some(obstacle);
                }
            }
        }

        None
    }
}
