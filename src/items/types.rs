use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Item category. Decides what `use` does and which slot combat reads it from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Potion,
    Weapon,
    Armor,
}

/// A purchasable item. Catalog entries are templates; the inventory holds clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub cost: u32,
    /// Healing for potions, damage for weapons, damage reduction for armor.
    pub effect: u32,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn new(name: &str, kind: ItemKind, cost: u32, effect: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            cost,
            effect,
            description: description.to_string(),
        }
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }

    /// Short stat summary, e.g. "+10 damage".
    pub fn effect_label(&self) -> String {
        match self.kind {
            ItemKind::Potion => format!("+{} health", self.effect),
            ItemKind::Weapon => format!("+{} damage", self.effect),
            ItemKind::Armor => format!("-{} damage taken", self.effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Sword", ItemKind::Weapon, 10, 10, "A plain blade");
        assert_eq!(item.name, "Sword");
        assert_eq!(item.kind, ItemKind::Weapon);
        assert_eq!(item.cost, 10);
        assert_eq!(item.effect, 10);
        assert!(item.is(ItemKind::Weapon));
        assert!(!item.is(ItemKind::Armor));
    }

    #[test]
    fn test_effect_label() {
        let potion = Item::new("Health Potion", ItemKind::Potion, 5, 30, "");
        let armor = Item::new("Iron Armor", ItemKind::Armor, 25, 8, "");
        assert_eq!(potion.effect_label(), "+30 health");
        assert_eq!(armor.effect_label(), "-8 damage taken");
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let item: Item = serde_json::from_str(
            r#"{"name":"Buckler","kind":"armor","cost":12,"effect":3}"#,
        )
        .unwrap();
        assert_eq!(item.kind, ItemKind::Armor);
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_clone_is_independent() {
        let template = Item::new("Sword", ItemKind::Weapon, 10, 10, "");
        let mut copy = template.clone();
        copy.effect = 99;
        assert_eq!(template.effect, 10);
    }
}
