//! The location graph: places, their menus, and the roads between them.

pub mod location;
pub mod transitions;

pub use location::{Action, Location};
pub use transitions::{check_transition, hunt, is_edge, travel, TravelOutcome};
