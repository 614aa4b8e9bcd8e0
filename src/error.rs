//! Recoverable game errors.
//!
//! None of these end a session. The game loop renders them and asks again.

use crate::core::input::InputError;
use crate::world::Location;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("You can't go from the {from} to the {to}: {reason}")]
    IllegalTransition {
        from: Location,
        to: Location,
        reason: &'static str,
    },

    #[error("The {item} costs {cost} gold, but you only have {gold}.")]
    InsufficientFunds { item: String, cost: u32, gold: u32 },

    #[error("{0}")]
    EmptySelection(&'static str),

    #[error("There is no item #{} (you have {}).", .index + 1, .len)]
    ItemNotFound { index: usize, len: usize },
}
