use crate::cell::{Cell, Position};
use crate::config::GridSize;
use crate::console::Console;
use crate::error::Result;

/// One straight run of wall cells.
#[derive(Debug)]
pub struct WallSegment {
    cells: Vec<Cell>,
}

impl WallSegment {
    fn horizontal(x_min: i32, x_max: i32, y: i32) -> Self {
        Self {
            cells: (x_min..=x_max)
                .map(|x| Cell::wall(Position { x, y }))
                .collect(),
        }
    }

    fn vertical(x: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            cells: (y_min..=y_max)
                .map(|y| Cell::wall(Position { x, y }))
                .collect(),
        }
    }

    /// Returns true when `position` lies on this segment.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.iter().any(|cell| cell.position == position)
    }

    /// Returns the segment's cells in drawing order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// The arena perimeter: four immutable wall segments built once from the
/// grid extrema, serving as a one-time render target and a per-tick
/// collision predicate.
#[derive(Debug)]
pub struct Wall {
    segments: [WallSegment; 4],
}

impl Wall {
    /// Builds the perimeter for `bounds`.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let x_max = bounds.x_max();
        let y_max = bounds.y_max();

        // The horizontal runs own the corners; the vertical runs cover the
        // rows in between, so every perimeter cell appears exactly once.
        let top = WallSegment::horizontal(0, x_max, 0);
        let bottom = WallSegment::horizontal(0, x_max, y_max);
        let left = WallSegment::vertical(0, 1, y_max - 1);
        let right = WallSegment::vertical(x_max, 1, y_max - 1);

        Self {
            segments: [top, bottom, left, right],
        }
    }

    /// Draws the full perimeter.
    pub fn draw<C: Console>(&self, console: &mut C) -> Result<()> {
        for segment in &self.segments {
            console.draw_line(segment.cells())?;
        }
        Ok(())
    }

    /// Returns true when `position` lies on any of the four segments.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.contains(position))
    }
}
