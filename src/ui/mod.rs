//! Text output and line input for the terminal game.

pub mod console;
pub mod text;

pub use console::Console;
