use std::collections::VecDeque;

use crossterm::event::KeyCode;

use crate::cell::{Cell, Position};
use crate::console::Console;
use crate::error::Result;
use crate::input::Direction;
use crate::wall::Wall;

/// Mutable snake state and movement behavior.
///
/// The body is a deque of positions with the tail at the front and the
/// head at the back, so one movement step is a pop at one end and a push
/// at the other.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake anchored at `tail`, laying `length` segments along
    /// `direction`; the last segment laid is the head.
    #[must_use]
    pub fn new(tail: Position, length: usize, direction: Direction) -> Self {
        assert!(length > 0, "snake must spawn with at least one segment");

        let mut body = VecDeque::with_capacity(length);
        let mut segment = tail;
        for _ in 0..length {
            body.push_back(segment);
            segment = segment.stepped(direction);
        }

        Self { body, direction }
    }

    /// Draws the whole body. Used once at game start; after that only
    /// per-cell deltas from [`Self::move_forward`] touch the screen.
    pub fn draw<C: Console>(&self, console: &mut C) -> Result<()> {
        let cells: Vec<Cell> = self.body.iter().copied().map(Cell::snake).collect();
        console.draw_line(&cells)
    }

    /// Advances the snake by exactly one cell in the current direction.
    ///
    /// The vacated tail is erased with a blank cell before the new head is
    /// drawn; these two deltas are the only drawing done during play.
    pub fn move_forward<C: Console>(&mut self, console: &mut C) -> Result<()> {
        self.drop_tail(console)?;
        self.advance_head(console)
    }

    /// Steers the snake from one raw key press, if any.
    ///
    /// Unrecognized keys (and input timeouts) leave the direction
    /// unchanged. Reversing straight into the body is allowed; there is no
    /// self-collision rule, so only the wall ends the game.
    pub fn update_direction(&mut self, entry: Option<KeyCode>) {
        if let Some(direction) = entry.and_then(Direction::from_key) {
            self.direction = direction;
        }
    }

    /// Returns true when the head sits on the food's coordinates.
    ///
    /// Compares positions only; the food's glyph never matters.
    #[must_use]
    pub fn hits_food(&self, food: &Cell) -> bool {
        self.head() == food.position
    }

    /// Grows the body by duplicating the current tail.
    ///
    /// The duplicate occupies the same cell as the tail, so nothing new is
    /// drawn this tick; subsequent moves cull it away and the body ends up
    /// one segment longer.
    pub fn eats_food(&mut self) {
        let tail = *self
            .body
            .front()
            .expect("snake body must always contain at least one segment");
        self.body.push_front(tail);
    }

    /// Returns true when the head sits on any wall cell.
    #[must_use]
    pub fn hits_wall(&self, wall: &Wall) -> bool {
        wall.contains(self.head())
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never happens in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn drop_tail<C: Console>(&mut self, console: &mut C) -> Result<()> {
        let tail = self
            .body
            .pop_front()
            .expect("snake body must always contain at least one segment");
        console.draw_point(Cell::blank(tail))
    }

    fn advance_head<C: Console>(&mut self, console: &mut C) -> Result<()> {
        let head = self.head().stepped(self.direction);
        self.body.push_back(head);
        console.draw_point(Cell::snake(head))
    }
}
