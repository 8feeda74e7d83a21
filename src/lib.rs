//! Core game library for the `gridsnake` terminal snake game.
//!
//! The simulation modules ([`snake`], [`wall`], [`food`], [`game`]) are
//! pure with respect to the terminal: all drawing goes through the
//! [`console::Console`] port, so the whole game can run headless in tests.

pub mod cell;
pub mod config;
pub mod console;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;
pub mod wall;
