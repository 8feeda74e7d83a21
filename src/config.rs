use crate::cell::Position;
use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the largest valid x coordinate.
    #[must_use]
    pub fn x_max(self) -> i32 {
        i32::from(self.width) - 1
    }

    /// Returns the largest valid y coordinate.
    #[must_use]
    pub fn y_max(self) -> i32 {
        i32::from(self.height) - 1
    }
}

/// Arena dimensions, wall perimeter included.
pub const GRID: GridSize = GridSize {
    width: 80,
    height: 20,
};

/// Number of body segments the snake spawns with.
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Direction the snake is heading when the game starts.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Position the snake's tail is anchored to at spawn; the body extends
/// from here along the initial direction.
pub const SNAKE_SPAWN_TAIL: Position = Position { x: 10, y: 10 };

/// Margin in cells kept between the grid edge and any spawned food.
pub const FOOD_INSET: i32 = 2;

/// How long one tick waits for input before moving on, in milliseconds.
/// This bound is what gives the game its fixed tick rate.
pub const TICK_TIMEOUT_MS: u64 = 500;

/// Seconds the final board stays on screen after the game ends.
pub const GAME_OVER_LINGER_SECS: u64 = 3;

/// Glyph drawn for each snake body segment.
pub const GLYPH_SNAKE: char = '#';

/// Glyph drawn for the current food.
pub const GLYPH_FOOD: char = '$';

/// Glyph drawn for each wall cell.
pub const GLYPH_WALL: char = '*';

/// Glyph drawn to erase a vacated cell.
pub const GLYPH_BLANK: char = ' ';
