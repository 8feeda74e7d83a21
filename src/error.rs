use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the game can surface.
///
/// Gameplay itself has no recoverable error states; everything here comes
/// from the terminal the game draws on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),

    #[error(
        "terminal too small: the arena needs {required_width}x{required_height} cells \
         but only {actual_width}x{actual_height} are available"
    )]
    TerminalTooSmall {
        required_width: u16,
        required_height: u16,
        actual_width: u16,
        actual_height: u16,
    },
}
