//! Guarded movement between locations.

use super::location::Location;
use crate::combat::{fight, CombatReport, OpponentKind};
use crate::core::game_state::GameState;
use crate::error::GameError;
use crate::items::ItemKind;
use rand::Rng;
use tracing::{info, warn};

/// Result of a permitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelOutcome {
    Arrived(Location),
    /// Entering the forest starts a fight. `location` is where the player ended up.
    Encounter {
        report: CombatReport,
        location: Location,
    },
}

/// The village is the hub: it reaches everywhere and everything returns to it.
pub fn is_edge(from: Location, to: Location) -> bool {
    match (from, to) {
        (Location::Village, Location::Village) => false,
        (Location::Village, _) => true,
        (_, Location::Village) => true,
        _ => false,
    }
}

/// Checks edge existence and equipment guards without touching state.
pub fn check_transition(state: &GameState, to: Location) -> Result<(), GameError> {
    let from = state.location();
    let reason = if !is_edge(from, to) {
        Some("there is no road between them")
    } else {
        match to {
            Location::Forest if !state.inventory.has_kind(ItemKind::Weapon) => {
                Some("it's too dangerous to enter without a weapon")
            }
            Location::DragonCave if !state.inventory.has_good_equipment() => {
                Some("you need a Steel Sword and some armor to face the dragon")
            }
            _ => None,
        }
    };

    match reason {
        Some(reason) => {
            warn!(%from, %to, reason, "transition rejected");
            Err(GameError::IllegalTransition { from, to, reason })
        }
        None => Ok(()),
    }
}

/// Moves the player, running the forest encounter on arrival there.
pub fn travel(
    state: &mut GameState,
    to: Location,
    rng: &mut impl Rng,
) -> Result<TravelOutcome, GameError> {
    check_transition(state, to)?;
    let from = state.location();
    state.player.location = to;
    info!(%from, %to, "travelled");

    if to == Location::Forest {
        let report = hunt(state, rng);
        return Ok(TravelOutcome::Encounter {
            location: state.location(),
            report,
        });
    }
    Ok(TravelOutcome::Arrived(to))
}

/// One monster fight in the forest. Anything short of a win sends the player
/// back to the village.
pub fn hunt(state: &mut GameState, rng: &mut impl Rng) -> CombatReport {
    let report = fight(state, OpponentKind::Monster, rng);
    if !report.player_won() {
        state.player.location = Location::Village;
        info!(outcome = ?report.outcome, "forest encounter lost, back to the village");
    }
    report
}
