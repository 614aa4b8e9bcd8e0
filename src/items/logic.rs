//! Buying and using items.

use super::catalog::{Catalog, Shop};
use super::types::{Item, ItemKind};
use crate::core::game_state::GameState;
use crate::error::GameError;
use tracing::{info, warn};

/// What happened when an item was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// Potion drunk and removed from the inventory.
    Healed { item: String, health: u32 },
    /// Weapons are never equipped; the best one is always used in combat.
    Readied { item: String },
    /// Armor is always worn.
    AlreadyWorn { item: String },
}

/// Pays for a clone of `item` and appends it to the inventory.
pub fn purchase(state: &mut GameState, item: &Item) -> Result<(), GameError> {
    if let Err(err) = state.player.pay_for(item) {
        warn!(item = %item.name, cost = item.cost, %err, "purchase refused");
        return Err(err);
    }
    state.inventory.add(item.clone());
    info!(
        item = %item.name,
        cost = item.cost,
        gold = state.player.gold(),
        "purchased"
    );
    Ok(())
}

/// Buys the `index`-th entry of a shop's stock.
pub fn buy_from(
    state: &mut GameState,
    catalog: &Catalog,
    shop: Shop,
    index: usize,
) -> Result<Item, GameError> {
    let stock = catalog.stock(shop);
    if stock.is_empty() {
        return Err(GameError::EmptySelection("There is nothing for sale here."));
    }
    let item = stock.get(index).ok_or(GameError::ItemNotFound {
        index,
        len: stock.len(),
    })?;
    purchase(state, item)?;
    Ok(item.clone())
}

/// Uses the `index`-th inventory item. Potions are consumed exactly once.
pub fn use_item(state: &mut GameState, index: usize) -> Result<UseOutcome, GameError> {
    if state.inventory.is_empty() {
        return Err(GameError::EmptySelection("Your inventory is empty."));
    }
    let item = state.inventory.get(index).ok_or(GameError::ItemNotFound {
        index,
        len: state.inventory.len(),
    })?;

    let outcome = match item.kind {
        ItemKind::Potion => {
            let effect = item.effect;
            let name = item.name.clone();
            let health = state.player.heal(effect);
            state.inventory.remove(index);
            info!(item = %name, health, "potion used");
            UseOutcome::Healed { item: name, health }
        }
        ItemKind::Weapon => UseOutcome::Readied {
            item: item.name.clone(),
        },
        ItemKind::Armor => UseOutcome::AlreadyWorn {
            item: item.name.clone(),
        },
    };
    Ok(outcome)
}
