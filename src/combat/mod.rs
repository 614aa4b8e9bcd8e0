//! Combat system types and logic.

pub mod logic;
pub mod scripted;
pub mod types;

pub use logic::{fight, mitigated_damage, roll_hit};
pub use scripted::ScriptedRng;
pub use types::*;
