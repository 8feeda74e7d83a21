use rand::rngs::StdRng;
use rand::Rng;

use crate::cell::{Cell, Position};
use crate::config::{GridSize, FOOD_INSET};
use crate::console::Console;
use crate::error::Result;

/// Spawns food uniformly inside the inset region of the arena and tracks
/// the one live food cell.
#[derive(Debug)]
pub struct FoodSpawner {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
    rng: StdRng,
    current: Option<Cell>,
}

impl FoodSpawner {
    /// Creates a spawner for `bounds`, keeping a [`FOOD_INSET`] margin
    /// from every grid edge. Spawn bounds are inclusive on both ends.
    #[must_use]
    pub fn new(bounds: GridSize, rng: StdRng) -> Self {
        Self {
            x_min: FOOD_INSET,
            x_max: i32::from(bounds.width) - FOOD_INSET,
            y_min: FOOD_INSET,
            y_max: i32::from(bounds.height) - FOOD_INSET,
            rng,
            current: None,
        }
    }

    /// Places a new food at a uniformly random inset position, replacing
    /// any previous one, and draws it.
    ///
    /// The spawn position is not checked against the snake's body; a food
    /// may land on an occupied cell and the game rules accept that.
    pub fn add_new_food<C: Console>(&mut self, console: &mut C) -> Result<()> {
        let position = Position {
            x: self.rng.gen_range(self.x_min..=self.x_max),
            y: self.rng.gen_range(self.y_min..=self.y_max),
        };

        let food = Cell::food(position);
        self.current = Some(food);
        console.draw_point(food)
    }

    /// Returns the live food cell, if one has been spawned.
    #[must_use]
    pub fn current_food(&self) -> Option<Cell> {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn place_current(&mut self, food: Cell) {
        self.current = Some(food);
    }
}
