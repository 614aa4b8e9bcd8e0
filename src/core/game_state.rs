use super::constants::{MAX_HEALTH, MIN_HEALTH, STARTING_GOLD, STARTING_HEALTH};
use crate::error::GameError;
use crate::items::{Inventory, Item};
use crate::world::Location;

/// Player vitals, purse and position.
///
/// Health only changes through [`PlayerState::update_health`], so it is never
/// observable outside `MIN_HEALTH..=MAX_HEALTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    health: u32,
    gold: u32,
    pub location: Location,
}

impl PlayerState {
    pub fn new(name: String) -> Self {
        Self {
            name,
            health: STARTING_HEALTH,
            gold: STARTING_GOLD,
            location: Location::Village,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn is_alive(&self) -> bool {
        self.health > MIN_HEALTH
    }

    /// Applies a signed health change and clamps the result to the valid range.
    /// Returns the new health.
    pub fn update_health(&mut self, delta: i64) -> u32 {
        let next = (self.health as i64).saturating_add(delta);
        self.health = next.clamp(MIN_HEALTH as i64, MAX_HEALTH as i64) as u32;
        self.health
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.update_health(amount as i64)
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.update_health(-(amount as i64))
    }

    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Deducts the item's cost, refusing rather than going negative.
    pub fn pay_for(&mut self, item: &Item) -> Result<(), GameError> {
        if self.gold < item.cost {
            return Err(GameError::InsufficientFunds {
                item: item.name.clone(),
                cost: item.cost,
                gold: self.gold,
            });
        }
        self.gold -= item.cost;
        Ok(())
    }
}

/// Everything a session owns. Threaded by `&mut` through every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player: PlayerState,
    pub inventory: Inventory,
    /// Set once the dragon falls. The only scripted win.
    pub victory: bool,
}

impl GameState {
    pub fn new(player_name: String) -> Self {
        Self {
            player: PlayerState::new(player_name),
            inventory: Inventory::new(),
            victory: false,
        }
    }

    pub fn location(&self) -> Location {
        self.player.location
    }

    pub fn is_defeated(&self) -> bool {
        !self.player.is_alive()
    }

    pub fn is_over(&self) -> bool {
        self.victory || self.is_defeated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    #[test]
    fn test_new_player_defaults() {
        let player = PlayerState::new("Aria".to_string());
        assert_eq!(player.health(), 100);
        assert_eq!(player.gold(), 20);
        assert_eq!(player.location, Location::Village);
        assert!(player.is_alive());
    }

    #[test]
    fn test_update_health_clamps_low() {
        let mut player = PlayerState::new("Aria".to_string());
        assert_eq!(player.update_health(-1000), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_update_health_clamps_high() {
        let mut player = PlayerState::new("Aria".to_string());
        player.update_health(-10);
        assert_eq!(player.health(), 90);
        assert_eq!(player.update_health(1000), 100);
    }

    #[test]
    fn test_update_health_extreme_deltas() {
        let mut player = PlayerState::new("Aria".to_string());
        assert_eq!(player.update_health(i64::MIN), 0);
        assert_eq!(player.update_health(i64::MAX), 100);
    }

    #[test]
    fn test_take_damage_and_heal() {
        let mut player = PlayerState::new("Aria".to_string());
        assert_eq!(player.take_damage(25), 75);
        assert_eq!(player.heal(10), 85);
        assert_eq!(player.take_damage(u32::MAX), 0);
    }

    #[test]
    fn test_pay_for_exact_amount() {
        let mut player = PlayerState::new("Aria".to_string());
        let item = Item::new("Costly", ItemKind::Armor, 20, 1, "");
        assert!(player.pay_for(&item).is_ok());
        assert_eq!(player.gold(), 0);
    }

    #[test]
    fn test_pay_for_rejects_overdraft() {
        let mut player = PlayerState::new("Aria".to_string());
        let item = Item::new("Crown", ItemKind::Armor, 21, 1, "");
        let err = player.pay_for(&item).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientFunds {
                cost: 21,
                gold: 20,
                ..
            }
        ));
        assert_eq!(player.gold(), 20);
    }

    #[test]
    fn test_game_state_over_conditions() {
        let mut state = GameState::new("Aria".to_string());
        assert!(!state.is_over());

        state.player.take_damage(100);
        assert!(state.is_defeated());
        assert!(state.is_over());

        let mut state = GameState::new("Aria".to_string());
        state.victory = true;
        assert!(state.is_over());
        assert!(!state.is_defeated());
    }
}
