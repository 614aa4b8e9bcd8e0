//! Game state, balance constants, input validation and the session loop.

pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod input;

pub use game_loop::{read_player_name, run, SessionEnd};
pub use game_state::{GameState, PlayerState};
pub use input::{parse_choice, InputError};
