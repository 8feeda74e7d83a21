use crate::config::{GLYPH_BLANK, GLYPH_FOOD, GLYPH_SNAKE, GLYPH_WALL};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns this position offset by exactly one cell along `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// A drawable point: a position plus the glyph shown there.
///
/// The role of a cell (snake segment, food, wall, erased) is carried
/// entirely by its glyph. Collision logic compares [`Position`]s directly
/// and never inspects glyphs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cell {
    pub position: Position,
    pub glyph: char,
}

impl Cell {
    /// Creates a snake body cell.
    #[must_use]
    pub fn snake(position: Position) -> Self {
        Self {
            position,
            glyph: GLYPH_SNAKE,
        }
    }

    /// Creates a food cell.
    #[must_use]
    pub fn food(position: Position) -> Self {
        Self {
            position,
            glyph: GLYPH_FOOD,
        }
    }

    /// Creates a wall cell.
    #[must_use]
    pub fn wall(position: Position) -> Self {
        Self {
            position,
            glyph: GLYPH_WALL,
        }
    }

    /// Creates a blank cell used to erase a vacated position.
    #[must_use]
    pub fn blank(position: Position) -> Self {
        Self {
            position,
            glyph: GLYPH_BLANK,
        }
    }
}
