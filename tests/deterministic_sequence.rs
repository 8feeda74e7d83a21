use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridsnake::cell::Position;
use gridsnake::config::{FOOD_INSET, GLYPH_FOOD, GRID};
use gridsnake::console::RecordingConsole;
use gridsnake::game::{Game, GamePhase};

#[test]
fn steered_run_ends_at_the_top_wall() {
    // One Up press on the first tick, then input timeouts for the rest.
    let console = RecordingConsole::with_entries(vec![KeyCode::Up]);
    let mut game = Game::new(console, GRID, StdRng::seed_from_u64(42));

    game.start().expect("headless start cannot fail");

    let mut guard = 0;
    while game.phase() == GamePhase::Running {
        game.tick().expect("headless tick cannot fail");
        guard += 1;
        assert!(guard <= 100, "game should end well before 100 ticks");
    }

    // Tick 1 moves the head to (14,10) before the Up press takes effect;
    // ten more ticks climb from y = 10 to the wall at y = 0.
    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.tick_count(), 11);
    assert_eq!(game.snake.head(), Position { x: 14, y: 0 });
}

#[test]
fn every_food_drawn_during_a_run_lies_in_the_inset_region() {
    let console = RecordingConsole::new();
    let mut game = Game::new(console, GRID, StdRng::seed_from_u64(9));

    game.run().expect("headless run cannot fail");

    let foods = game.console().drawn_with_glyph(GLYPH_FOOD);
    assert!(!foods.is_empty());

    for food in foods {
        assert!(food.position.x >= FOOD_INSET);
        assert!(food.position.x <= i32::from(GRID.width) - FOOD_INSET);
        assert!(food.position.y >= FOOD_INSET);
        assert!(food.position.y <= i32::from(GRID.height) - FOOD_INSET);
    }
}
