use crossterm::event::KeyCode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a raw key press to a direction.
    ///
    /// Only the arrow keys steer the snake; any other key yields `None`
    /// and the caller keeps its current direction for the tick.
    #[must_use]
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}
