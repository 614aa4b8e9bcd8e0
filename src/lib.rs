//! Adventure - a small turn-based text adventure.
//!
//! The player shops in the village, proves themselves against a forest
//! monster, and finally faces the dragon. This library holds the game logic;
//! `main.rs` wires it to the terminal.

pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod ui;
pub mod world;

pub use crate::core::{GameState, SessionEnd};
pub use error::GameError;
