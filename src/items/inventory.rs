use super::types::{Item, ItemKind};
use crate::core::constants::DRAGON_WEAPON_NAME;

/// Player-owned items in acquisition order.
///
/// Nothing is ever "equipped": combat reads the best weapon and best armor
/// straight from here each time it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.is(kind))
    }

    pub fn has_kind(&self, kind: ItemKind) -> bool {
        self.of_kind(kind).next().is_some()
    }

    /// Highest-effect item of `kind`. Ties go to the earliest acquisition.
    pub fn best_of_kind(&self, kind: ItemKind) -> Option<&Item> {
        self.of_kind(kind).fold(None, |best: Option<&Item>, item| match best {
            Some(current) if current.effect >= item.effect => Some(current),
            _ => Some(item),
        })
    }

    /// Effect of the best item of `kind`, 0 when none is owned.
    pub fn best_effect(&self, kind: ItemKind) -> u32 {
        self.best_of_kind(kind).map_or(0, |item| item.effect)
    }

    /// A Steel Sword plus any armor: what the dragon cave requires.
    pub fn has_good_equipment(&self) -> bool {
        let has_steel_sword = self
            .of_kind(ItemKind::Weapon)
            .any(|item| item.name == DRAGON_WEAPON_NAME);
        has_steel_sword && self.has_kind(ItemKind::Armor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(name: &str, effect: u32) -> Item {
        Item::new(name, ItemKind::Weapon, 10, effect, "")
    }

    fn armor(name: &str, effect: u32) -> Item {
        Item::new(name, ItemKind::Armor, 10, effect, "")
    }

    #[test]
    fn test_inventory_starts_empty() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert!(inv.best_of_kind(ItemKind::Weapon).is_none());
        assert_eq!(inv.best_effect(ItemKind::Armor), 0);
    }

    #[test]
    fn test_best_of_kind_picks_max_effect() {
        let mut inv = Inventory::new();
        inv.add(weapon("A", 10));
        inv.add(weapon("B", 20));
        inv.add(weapon("C", 5));
        assert_eq!(inv.best_of_kind(ItemKind::Weapon).unwrap().effect, 20);
        assert_eq!(inv.best_of_kind(ItemKind::Weapon).unwrap().name, "B");
    }

    #[test]
    fn test_best_of_kind_tie_keeps_first() {
        let mut inv = Inventory::new();
        inv.add(weapon("First", 15));
        inv.add(weapon("Second", 15));
        assert_eq!(inv.best_of_kind(ItemKind::Weapon).unwrap().name, "First");
    }

    #[test]
    fn test_best_of_kind_ignores_other_kinds() {
        let mut inv = Inventory::new();
        inv.add(armor("Plate", 50));
        inv.add(weapon("Dagger", 3));
        assert_eq!(inv.best_of_kind(ItemKind::Weapon).unwrap().name, "Dagger");
        assert!(inv.best_of_kind(ItemKind::Potion).is_none());
    }

    #[test]
    fn test_of_kind_preserves_order() {
        let mut inv = Inventory::new();
        inv.add(weapon("A", 1));
        inv.add(armor("X", 1));
        inv.add(weapon("B", 1));
        let names: Vec<&str> = inv
            .of_kind(ItemKind::Weapon)
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut inv = Inventory::new();
        inv.add(weapon("A", 1));
        assert!(inv.remove(3).is_none());
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.remove(0).unwrap().name, "A");
        assert!(inv.is_empty());
    }

    #[test]
    fn test_good_equipment_requires_both() {
        let mut inv = Inventory::new();
        inv.add(weapon("Sword", 10));
        inv.add(armor("Leather Armor", 3));
        assert!(!inv.has_good_equipment());

        inv.add(weapon(DRAGON_WEAPON_NAME, 20));
        assert!(inv.has_good_equipment());
    }

    #[test]
    fn test_good_equipment_without_armor() {
        let mut inv = Inventory::new();
        inv.add(weapon(DRAGON_WEAPON_NAME, 20));
        assert!(!inv.has_good_equipment());
    }

    #[test]
    fn test_steel_sword_name_must_be_a_weapon() {
        let mut inv = Inventory::new();
        inv.add(Item::new(DRAGON_WEAPON_NAME, ItemKind::Armor, 1, 1, ""));
        assert!(!inv.has_good_equipment());
    }
}
