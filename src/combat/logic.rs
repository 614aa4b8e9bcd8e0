//! Combat resolution.
//!
//! Every fight is a fresh simulation over the current `GameState`. The random
//! source is passed in so that tests can replay exact rolls.

use super::types::*;
use crate::core::constants::{DRAGON_SCORCH_PENALTY, MIN_MITIGATED_DAMAGE, PLAYER_HIT_CHANCE};
use crate::core::game_state::GameState;
use crate::items::ItemKind;
use rand::Rng;
use tracing::{debug, info, warn};

/// Draws one uniform roll in [0, 1) and compares it against `chance`.
pub fn roll_hit(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Damage after armor. Armor softens a blow down to 1, never to 0.
pub fn mitigated_damage(raw_damage: u32, armor: u32) -> u32 {
    raw_damage
        .saturating_sub(armor)
        .max(MIN_MITIGATED_DAMAGE)
}

/// Fights `kind` to the finish with the best weapon and armor in the inventory.
///
/// Applies damage, gold and the victory flag to `state` as it goes and returns
/// a round-by-round report.
pub fn fight(state: &mut GameState, kind: OpponentKind, rng: &mut impl Rng) -> CombatReport {
    let mut opponent = Opponent::spawn(kind);
    let weapon = state.inventory.best_of_kind(ItemKind::Weapon).cloned();
    let armor = state.inventory.best_of_kind(ItemKind::Armor).cloned();

    let mut report = CombatReport::new(opponent.clone());
    report.weapon = weapon.as_ref().map(|w| w.name.clone());
    report.armor = armor.as_ref().map(|a| a.name.clone());

    if kind == OpponentKind::Dragon && !state.inventory.has_good_equipment() {
        state.player.take_damage(DRAGON_SCORCH_PENALTY);
        report.penalty = DRAGON_SCORCH_PENALTY;
        report.outcome = CombatOutcome::Fled;
        warn!(
            health = state.player.health(),
            "dragon refused an under-equipped challenger"
        );
        return report;
    }

    let Some(weapon) = weapon else {
        warn!(opponent = %kind, "no weapon owned, retreating without a fight");
        report.outcome = CombatOutcome::Retreated;
        return report;
    };
    let armor_effect = state.inventory.best_effect(ItemKind::Armor);

    info!(
        opponent = %kind,
        weapon = %weapon.name,
        armor = armor_effect,
        "combat started"
    );

    while opponent.is_alive() && state.player.is_alive() {
        let player_hit = roll_hit(PLAYER_HIT_CHANCE, rng);
        let damage_dealt = if player_hit { weapon.effect } else { 0 };
        opponent.take_damage(damage_dealt);

        let mut round = RoundLog {
            player_hit,
            damage_dealt,
            opponent_health: opponent.health,
            opponent_hit: None,
            damage_taken: 0,
            player_health: state.player.health(),
        };

        if opponent.is_alive() {
            let opponent_hit = roll_hit(kind.hit_chance(), rng);
            if opponent_hit {
                round.damage_taken = mitigated_damage(opponent.attack_damage, armor_effect);
                round.player_health = state.player.take_damage(round.damage_taken);
            }
            round.opponent_hit = Some(opponent_hit);
        }

        debug!(
            round = report.rounds.len() + 1,
            player_hit,
            opponent_health = round.opponent_health,
            player_health = round.player_health,
            "combat round"
        );
        report.rounds.push(round);
    }

    report.opponent = opponent.clone();
    if opponent.is_alive() {
        report.outcome = CombatOutcome::Lost;
        info!(opponent = %kind, rounds = report.rounds.len(), "player defeated");
        return report;
    }

    report.outcome = CombatOutcome::Won;
    report.gold_awarded = kind.gold_reward();
    state.player.earn_gold(report.gold_awarded);
    if kind == OpponentKind::Dragon {
        state.victory = true;
    }
    info!(
        opponent = %kind,
        rounds = report.rounds.len(),
        gold = state.player.gold(),
        "opponent defeated"
    );
    report
}
