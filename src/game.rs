use rand::rngs::StdRng;

use crate::cell::Cell;
use crate::config::{GridSize, INITIAL_DIRECTION, INITIAL_SNAKE_LENGTH, SNAKE_SPAWN_TAIL};
use crate::console::Console;
use crate::error::Result;
use crate::food::FoodSpawner;
use crate::snake::Snake;
use crate::wall::Wall;

/// Lifecycle states of one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended,
}

/// Owns all game state and drives the tick loop through a console port.
///
/// `Ended` is terminal: the only way out of the loop is the snake's head
/// landing on a wall cell.
pub struct Game<C: Console> {
    console: C,
    pub snake: Snake,
    wall: Wall,
    spawner: FoodSpawner,
    phase: GamePhase,
    tick_count: u64,
}

impl<C: Console> Game<C> {
    /// Creates a fresh, not-yet-started session on `bounds`.
    #[must_use]
    pub fn new(console: C, bounds: GridSize, rng: StdRng) -> Self {
        Self {
            console,
            snake: Snake::new(SNAKE_SPAWN_TAIL, INITIAL_SNAKE_LENGTH, INITIAL_DIRECTION),
            wall: Wall::new(bounds),
            spawner: FoodSpawner::new(bounds, rng),
            phase: GamePhase::NotStarted,
            tick_count: 0,
        }
    }

    /// Draws the wall and the initial snake, spawns the first food, and
    /// transitions to `Running`.
    pub fn start(&mut self) -> Result<()> {
        self.wall.draw(&mut self.console)?;
        self.snake.draw(&mut self.console)?;
        self.spawner.add_new_food(&mut self.console)?;
        self.phase = GamePhase::Running;
        Ok(())
    }

    /// Starts the session and ticks until the snake hits the wall.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.phase == GamePhase::Running {
            self.tick()?;
        }
        Ok(())
    }

    /// Advances the session by one tick.
    ///
    /// The order is fixed: move, read one input entry (bounded by the tick
    /// timeout), steer, food check, wall check. A no-op unless `Running`.
    pub fn tick(&mut self) -> Result<()> {
        if self.phase != GamePhase::Running {
            return Ok(());
        }

        self.tick_count += 1;
        self.snake.move_forward(&mut self.console)?;

        let entry = self.console.get_user_entry()?;
        self.snake.update_direction(entry);

        if let Some(food) = self.spawner.current_food() {
            if self.snake.hits_food(&food) {
                self.snake.eats_food();
                self.spawner.add_new_food(&mut self.console)?;
            }
        }

        if self.snake.hits_wall(&self.wall) {
            self.phase = GamePhase::Ended;
        }

        Ok(())
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns how many ticks have run.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the live food cell, if any.
    #[must_use]
    pub fn current_food(&self) -> Option<Cell> {
        self.spawner.current_food()
    }

    /// Returns the console port, for inspection after a headless run.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::cell::{Cell, Position};
    use crate::config::{GridSize, GLYPH_FOOD, GLYPH_SNAKE, GLYPH_WALL};
    use crate::console::RecordingConsole;
    use crate::input::Direction;

    use super::{Game, GamePhase};

    const BOUNDS: GridSize = GridSize {
        width: 80,
        height: 20,
    };

    fn new_game(seed: u64) -> Game<RecordingConsole> {
        Game::new(RecordingConsole::new(), BOUNDS, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn tick_before_start_changes_nothing() {
        let mut game = new_game(1);

        game.tick().unwrap();

        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.tick_count(), 0);
        assert!(game.console().drawn.is_empty());
        assert!(game.current_food().is_none());
    }

    #[test]
    fn start_draws_wall_snake_and_first_food() {
        let mut game = new_game(2);

        game.start().unwrap();

        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.console().drawn_with_glyph(GLYPH_WALL).len(), 196);
        assert_eq!(game.console().drawn_with_glyph(GLYPH_SNAKE).len(), 4);
        assert_eq!(game.console().drawn_with_glyph(GLYPH_FOOD).len(), 1);
    }

    #[test]
    fn eating_food_grows_the_snake_and_spawns_a_replacement() {
        let mut game = new_game(3);
        game.start().unwrap();

        // The head is at (13,10) heading right; plant the food one step
        // ahead so the very next tick eats it.
        game.spawner
            .place_current(Cell::food(game.snake.head().stepped(Direction::Right)));

        game.tick().unwrap();

        assert_eq!(game.snake.len(), 5);
        assert_eq!(game.phase(), GamePhase::Running);
        // Initial spawn plus the replacement.
        assert_eq!(game.console().drawn_with_glyph(GLYPH_FOOD).len(), 2);
    }

    #[test]
    fn unsteered_snake_ends_at_the_right_wall() {
        let mut game = new_game(4);
        game.start().unwrap();

        for _ in 0..200 {
            if game.phase() == GamePhase::Ended {
                break;
            }
            game.tick().unwrap();
        }

        // Head spawns at x = 13 and the right wall sits at x = 79.
        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.tick_count(), 66);
        assert_eq!(game.snake.head(), Position { x: 79, y: 10 });
    }

    #[test]
    fn ended_phase_is_terminal() {
        let mut game = new_game(5);
        game.start().unwrap();

        while game.phase() != GamePhase::Ended {
            game.tick().unwrap();
        }

        let ticks_at_end = game.tick_count();
        let head_at_end = game.snake.head();

        game.tick().unwrap();

        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.tick_count(), ticks_at_end);
        assert_eq!(game.snake.head(), head_at_end);
    }
}
