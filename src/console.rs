use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::cell::Cell;
use crate::config::GridSize;
use crate::error::{Error, Result};

/// Rendering and input port the game draws through.
///
/// The game emits per-cell deltas rather than whole frames, so the port
/// only needs to place single glyphs and hand back the latest key press.
pub trait Console {
    /// Places `cell.glyph` at the cell's coordinates.
    fn draw_point(&mut self, cell: Cell) -> Result<()>;

    /// Draws every cell of an ordered sequence.
    fn draw_line(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.draw_point(*cell)?;
        }
        Ok(())
    }

    /// Blocks up to the configured tick timeout for one key press.
    ///
    /// Returns `None` when the timeout expires without input; this bound
    /// is what paces the game loop.
    fn get_user_entry(&mut self) -> Result<Option<KeyCode>>;
}

/// Crossterm-backed console for one game session.
///
/// Owns the terminal lifecycle (raw mode + alternate screen + hidden
/// cursor); on drop, terminal state is restored best-effort.
pub struct TerminalConsole {
    stdout: Stdout,
    tick_timeout: Duration,
}

impl TerminalConsole {
    /// Enters raw mode and the alternate screen.
    ///
    /// Fails with [`Error::TerminalTooSmall`] when the terminal cannot fit
    /// the arena, before any terminal state has been touched.
    pub fn enter(required: GridSize, tick_timeout: Duration) -> Result<Self> {
        let (actual_width, actual_height) = crossterm::terminal::size()?;
        if actual_width < required.width || actual_height < required.height {
            return Err(Error::TerminalTooSmall {
                required_width: required.width,
                required_height: required.height,
                actual_width,
                actual_height,
            });
        }

        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        Ok(Self {
            stdout,
            tick_timeout,
        })
    }
}

impl Console for TerminalConsole {
    fn draw_point(&mut self, cell: Cell) -> Result<()> {
        let (Ok(x), Ok(y)) = (
            u16::try_from(cell.position.x),
            u16::try_from(cell.position.y),
        ) else {
            // Off-screen coordinates are silently skipped.
            return Ok(());
        };

        queue!(self.stdout, MoveTo(x, y), Print(cell.glyph))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_line(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            let (Ok(x), Ok(y)) = (
                u16::try_from(cell.position.x),
                u16::try_from(cell.position.y),
            ) else {
                continue;
            };
            queue!(self.stdout, MoveTo(x, y), Print(cell.glyph))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn get_user_entry(&mut self) -> Result<Option<KeyCode>> {
        if event::poll(self.tick_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key.code));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

/// Leaves raw mode and the alternate screen, ignoring failures.
///
/// Shared by [`TerminalConsole`]'s drop impl and the binary's panic hook
/// so the terminal is restored on abnormal exits too.
pub fn restore_terminal_best_effort() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}

/// Headless console that records draw calls and replays scripted input.
///
/// Used by tests to assert on the exact draw deltas the game emits and to
/// drive deterministic input sequences.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    /// Every cell drawn, in order.
    pub drawn: Vec<Cell>,
    entries: VecDeque<KeyCode>,
}

impl RecordingConsole {
    /// Creates a console with no scripted input; every tick times out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that replays `entries` one per tick, then times out.
    #[must_use]
    pub fn with_entries(entries: Vec<KeyCode>) -> Self {
        Self {
            drawn: Vec::new(),
            entries: VecDeque::from(entries),
        }
    }

    /// Returns the cells drawn with `glyph`, in draw order.
    #[must_use]
    pub fn drawn_with_glyph(&self, glyph: char) -> Vec<Cell> {
        self.drawn
            .iter()
            .copied()
            .filter(|cell| cell.glyph == glyph)
            .collect()
    }
}

impl Console for RecordingConsole {
    fn draw_point(&mut self, cell: Cell) -> Result<()> {
        self.drawn.push(cell);
        Ok(())
    }

    fn get_user_entry(&mut self) -> Result<Option<KeyCode>> {
        Ok(self.entries.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::cell::{Cell, Position};

    use super::{Console, RecordingConsole};

    #[test]
    fn draw_line_draws_every_cell_in_order() {
        let mut console = RecordingConsole::new();
        let cells = vec![
            Cell::wall(Position { x: 0, y: 0 }),
            Cell::wall(Position { x: 1, y: 0 }),
            Cell::wall(Position { x: 2, y: 0 }),
        ];

        console.draw_line(&cells).expect("recording never fails");

        assert_eq!(console.drawn, cells);
    }

    #[test]
    fn scripted_entries_replay_then_time_out() {
        let mut console = RecordingConsole::with_entries(vec![KeyCode::Up, KeyCode::Left]);

        assert_eq!(console.get_user_entry().unwrap(), Some(KeyCode::Up));
        assert_eq!(console.get_user_entry().unwrap(), Some(KeyCode::Left));
        assert_eq!(console.get_user_entry().unwrap(), None);
    }
}
