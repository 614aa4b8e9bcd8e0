//! Shop stock definitions.
//!
//! The built-in catalog covers the Blacksmith and the Market. A replacement
//! can be loaded from JSON with [`Catalog::from_json`] or [`Catalog::load`].

use super::types::{Item, ItemKind};
use crate::core::constants::DRAGON_WEAPON_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog entry '{name}': {reason}")]
    Invalid { name: String, reason: &'static str },

    #[error("catalog sells no {0}, so the Dragon Cave could never be entered")]
    MissingGear(&'static str),
}

/// Which merchant a stock list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shop {
    Blacksmith,
    Market,
}

/// Immutable item templates, grouped by merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub blacksmith: Vec<Item>,
    #[serde(default)]
    pub market: Vec<Item>,
}

impl Catalog {
    pub fn stock(&self, shop: Shop) -> &[Item] {
        match shop {
            Shop::Blacksmith => &self.blacksmith,
            Shop::Market => &self.market,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn items(&self) -> impl Iterator<Item = &Item> {
        self.blacksmith.iter().chain(self.market.iter())
    }

    /// Rejects catalogs that would make the game unwinnable or nonsensical.
    /// A zero-damage weapon would let a fight run forever, and the dragon
    /// needs a Steel Sword and some armor to be on sale somewhere.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for item in self.items() {
            let invalid = |reason| CatalogError::Invalid {
                name: item.name.clone(),
                reason,
            };
            if item.name.trim().is_empty() {
                return Err(invalid("name must not be empty"));
            }
            match item.kind {
                ItemKind::Weapon | ItemKind::Potion if item.effect == 0 => {
                    return Err(invalid("weapons and potions need a positive effect"));
                }
                _ => {}
            }
        }

        if !self
            .items()
            .any(|item| item.is(ItemKind::Weapon) && item.name == DRAGON_WEAPON_NAME)
        {
            return Err(CatalogError::MissingGear("Steel Sword"));
        }
        if !self.items().any(|item| item.is(ItemKind::Armor)) {
            return Err(CatalogError::MissingGear("armor"));
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            blacksmith: vec![
                Item::new(
                    "Sword",
                    ItemKind::Weapon,
                    10,
                    10,
                    "A plain iron blade. Good enough for the forest.",
                ),
                Item::new(
                    DRAGON_WEAPON_NAME,
                    ItemKind::Weapon,
                    30,
                    20,
                    "Folded steel, sharp enough to bite through dragon scale.",
                ),
                Item::new(
                    "Iron Armor",
                    ItemKind::Armor,
                    25,
                    10,
                    "Heavy plates that turn aside claws and fire.",
                ),
            ],
            market: vec![
                Item::new(
                    "Health Potion",
                    ItemKind::Potion,
                    5,
                    30,
                    "Restores 30 health. Single use.",
                ),
                Item::new(
                    "Leather Armor",
                    ItemKind::Armor,
                    15,
                    5,
                    "Light armor stitched by the village tanner.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(Catalog::default().validate().is_ok());
    }

    #[test]
    fn test_default_catalog_sells_dragon_gear() {
        let catalog = Catalog::default();
        let blacksmith = catalog.stock(Shop::Blacksmith);
        assert!(blacksmith
            .iter()
            .any(|i| i.name == DRAGON_WEAPON_NAME && i.kind == ItemKind::Weapon));
        assert!(blacksmith.iter().any(|i| i.kind == ItemKind::Armor));
    }

    #[test]
    fn test_default_catalog_market_has_potion() {
        let catalog = Catalog::default();
        assert!(catalog
            .stock(Shop::Market)
            .iter()
            .any(|i| i.kind == ItemKind::Potion));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "blacksmith": [
                {"name": "Club", "kind": "weapon", "cost": 2, "effect": 4, "description": "Heavy."},
                {"name": "Steel Sword", "kind": "weapon", "cost": 40, "effect": 25}
            ],
            "market": [
                {"name": "Buckler", "kind": "armor", "cost": 12, "effect": 3}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.blacksmith.len(), 2);
        assert_eq!(catalog.blacksmith[0].name, "Club");
        assert_eq!(catalog.stock(Shop::Market)[0].description, "");
    }

    #[test]
    fn test_from_json_missing_shop_defaults_empty() {
        let json = r#"{"blacksmith": [
            {"name": "Steel Sword", "kind": "weapon", "cost": 30, "effect": 20},
            {"name": "Iron Armor", "kind": "armor", "cost": 25, "effect": 10}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.market.is_empty());
    }

    #[test]
    fn test_from_json_rejects_catalog_without_steel_sword() {
        let json = r#"{
            "blacksmith": [{"name": "Club", "kind": "weapon", "cost": 2, "effect": 4}],
            "market": [{"name": "Buckler", "kind": "armor", "cost": 12, "effect": 3}]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::MissingGear("Steel Sword"))
        ));
    }

    #[test]
    fn test_from_json_rejects_catalog_without_armor() {
        let json = r#"{"blacksmith": [{"name": "Steel Sword", "kind": "weapon", "cost": 30, "effect": 20}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::MissingGear("armor")));
        assert_eq!(
            err.to_string(),
            "catalog sells no armor, so the Dragon Cave could never be entered"
        );
    }

    #[test]
    fn test_steel_sword_must_be_a_weapon() {
        let json = r#"{"market": [
            {"name": "Steel Sword", "kind": "armor", "cost": 30, "effect": 20}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::MissingGear("Steel Sword"))
        ));
    }

    #[test]
    fn test_from_json_rejects_zero_damage_weapon() {
        let json = r#"{"blacksmith": [{"name": "Twig", "kind": "weapon", "cost": 1, "effect": 0}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_blank_name() {
        let json = r#"{"market": [{"name": "  ", "kind": "armor", "cost": 1, "effect": 0}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/definitely/not/here/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
