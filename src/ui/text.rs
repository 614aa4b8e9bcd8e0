//! Plain-text rendering. Every line the player reads is built here.

use crate::combat::{CombatOutcome, CombatReport, OpponentKind};
use crate::core::constants::MAX_HEALTH;
use crate::core::game_state::GameState;
use crate::items::{Inventory, Item, ItemKind, UseOutcome};
use crate::world::{Location, TravelOutcome};
use strum::IntoEnumIterator;

pub fn welcome(state: &GameState) -> Vec<String> {
    vec![
        "Welcome to the Adventure Game!".to_string(),
        "Prepare yourself for an epic journey!".to_string(),
        format!(
            "Welcome, {}! You start your journey in the {}.",
            state.player.name,
            state.location()
        ),
        stats_line(state),
    ]
}

pub fn stats_line(state: &GameState) -> String {
    format!(
        "Health: {}, Gold: {}",
        state.player.health(),
        state.player.gold()
    )
}

fn numbered(entries: impl IntoIterator<Item = String>) -> Vec<String> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect()
}

pub fn location_view(state: &GameState) -> Vec<String> {
    let location = state.location();
    let mut lines = vec![
        String::new(),
        format!("=== {} ===", location),
        location.description().to_string(),
        stats_line(state),
        "What would you like to do?".to_string(),
    ];
    lines.extend(numbered(location.menu().iter().map(|a| a.label())));
    lines
}

pub fn choice_prompt(option_count: usize) -> String {
    format!("Enter choice (1-{}): ", option_count)
}

pub fn status(state: &GameState) -> Vec<String> {
    let mut lines = vec![
        format!("=== {} ===", state.player.name),
        format!("Health: {}/{}", state.player.health(), MAX_HEALTH),
        format!("Gold: {}", state.player.gold()),
        format!("Location: {}", state.location()),
    ];
    let inventory = &state.inventory;
    if inventory.is_empty() {
        lines.push("Inventory: empty".to_string());
        return lines;
    }
    lines.push(format!("Inventory ({}):", inventory_counts(inventory)));
    lines.extend(inventory.iter().map(|item| format!("  - {}", item_summary(item))));

    let best = |kind| {
        inventory
            .best_of_kind(kind)
            .map_or_else(|| "none".to_string(), |i: &Item| i.name.clone())
    };
    lines.push(format!(
        "Fighting with: {} / Wearing: {}",
        best(ItemKind::Weapon),
        best(ItemKind::Armor)
    ));
    if inventory.has_good_equipment() {
        lines.push("You are ready to face the dragon.".to_string());
    }
    lines
}

pub fn item_summary(item: &Item) -> String {
    format!("{} ({}, {})", item.name, item.kind, item.effect_label())
}

pub fn help(location: Location) -> Vec<String> {
    let mut lines = vec![
        "=== Help ===".to_string(),
        "Pick an option by typing its number and pressing Enter.".to_string(),
        "Buy weapons and armor from the Blacksmith, potions from the Market.".to_string(),
        "You need a weapon before entering the Forest, where a monster awaits.".to_string(),
        "The Dragon Cave is only open to those with a Steel Sword and armor.".to_string(),
        "In a fight you always use your best weapon and your best armor.".to_string(),
        "Armor reduces each blow, but every hit still costs at least 1 health.".to_string(),
        "Defeat the dragon to win. If your health reaches 0, the game is over.".to_string(),
    ];
    match location {
        Location::Blacksmith | Location::Market => {
            lines.push("Items you buy go straight into your inventory.".to_string())
        }
        Location::DragonCave => {
            lines.push("Drink a potion before the fight if you are hurt.".to_string())
        }
        Location::Village | Location::Forest => {}
    }
    lines
}

pub fn shop_listing(location: Location, stock: &[Item], gold: u32) -> Vec<String> {
    let mut lines = vec![format!("=== {} wares (you have {} gold) ===", location, gold)];
    lines.extend(numbered(
        stock
            .iter()
            .map(|item| format!("{} - {} gold - {}", item_summary(item), item.cost, item.description))
            .chain(std::iter::once("Never mind".to_string())),
    ));
    lines
}

pub fn purchased(item: &Item, state: &GameState) -> String {
    format!(
        "You bought the {}. You have {} gold left.",
        item.name,
        state.player.gold()
    )
}

pub fn inventory_listing(inventory: &Inventory) -> Vec<String> {
    let mut lines = vec!["=== Your items ===".to_string()];
    lines.extend(numbered(
        inventory
            .iter()
            .map(item_summary)
            .chain(std::iter::once("Never mind".to_string())),
    ));
    lines
}

pub fn item_used(outcome: &UseOutcome) -> String {
    match outcome {
        UseOutcome::Healed { item, health } => {
            format!("You drink the {}. Health is now {}.", item, health)
        }
        UseOutcome::Readied { item } => {
            format!("You ready your {}. It feels good in your hand.", item)
        }
        UseOutcome::AlreadyWorn { item } => format!("You are already wearing your {}.", item),
    }
}

pub fn travelled(outcome: &TravelOutcome) -> Vec<String> {
    match outcome {
        TravelOutcome::Arrived(to) => vec![format!("You make your way to the {}.", to)],
        TravelOutcome::Encounter { report, location } => {
            let mut lines = vec!["You step into the forest...".to_string()];
            lines.extend(combat(report));
            if *location == Location::Village && report.outcome != CombatOutcome::Lost {
                lines.push("You hurry back to the village.".to_string());
            }
            lines
        }
    }
}

pub fn combat(report: &CombatReport) -> Vec<String> {
    let name = &report.opponent.name;
    match report.outcome {
        CombatOutcome::Fled => {
            return vec![
                format!(
                    "The {} takes one look at your gear and breathes fire!",
                    name
                ),
                format!(
                    "You flee, scorched! You lose {} health.",
                    report.penalty
                ),
            ]
        }
        CombatOutcome::Retreated => {
            return vec![format!(
                "You have no weapon, so you back away from the {}.",
                name
            )]
        }
        CombatOutcome::Won | CombatOutcome::Lost => {}
    }

    let mut lines = vec![match report.opponent.kind {
        OpponentKind::Monster => format!("A {} leaps out at you!", name),
        OpponentKind::Dragon => format!("The {} rises from its hoard, eyes burning.", name),
    }];
    lines.push(format!(
        "You fight with your {}{}.",
        report.weapon.as_deref().unwrap_or("bare hands"),
        report
            .armor
            .as_deref()
            .map(|a| format!(", protected by your {}", a))
            .unwrap_or_default()
    ));

    for round in &report.rounds {
        if round.player_hit {
            lines.push(format!(
                "You hit the {} for {} damage. ({} health: {})",
                name, round.damage_dealt, name, round.opponent_health
            ));
        } else {
            lines.push("You miss!".to_string());
        }
        match round.opponent_hit {
            Some(true) => lines.push(format!(
                "The {} hits you for {} damage. (Your health: {})",
                name, round.damage_taken, round.player_health
            )),
            Some(false) => lines.push(format!("The {} misses!", name)),
            None => {}
        }
    }

    lines.push(format!(
        "After {} rounds you dealt {} damage and took {}.",
        report.rounds.len(),
        report.total_damage_dealt(),
        report.total_damage_taken()
    ));
    lines.push(match (report.outcome, report.opponent.kind) {
        (CombatOutcome::Won, OpponentKind::Monster) => format!(
            "You defeated the {} and found {} gold!",
            name, report.gold_awarded
        ),
        (CombatOutcome::Won, OpponentKind::Dragon) => format!(
            "The {} falls! You claim {} gold from its hoard.",
            name, report.gold_awarded
        ),
        _ => format!("The {} has beaten you.", name),
    });
    lines
}

pub fn victory(state: &GameState) -> Vec<String> {
    vec![
        String::new(),
        "*******************************************".to_string(),
        format!("Congratulations, {}! You have slain the dragon!", state.player.name),
        "The village is safe, and songs of your deeds will be sung for ages.".to_string(),
        format!(
            "Final stats - Health: {}, Gold: {}, Items: {}",
            state.player.health(),
            state.player.gold(),
            state.inventory.len()
        ),
        "*******************************************".to_string(),
    ]
}

pub fn defeat(state: &GameState) -> Vec<String> {
    vec![
        String::new(),
        "Your health has dropped to 0.".to_string(),
        format!("{} has fallen. Game over!", state.player.name),
    ]
}

pub fn farewell(state: &GameState) -> String {
    format!("Thanks for playing, {}! Farewell.", state.player.name)
}

/// Counts of owned items per kind, e.g. "2 Weapon, 1 Armor".
pub fn inventory_counts(inventory: &Inventory) -> String {
    let counts: Vec<String> = ItemKind::iter()
        .map(|kind| (kind, inventory.of_kind(kind).count()))
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect();
    if counts.is_empty() {
        "nothing".to_string()
    } else {
        counts.join(", ")
    }
}
