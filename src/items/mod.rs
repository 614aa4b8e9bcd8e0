//! Item templates, the player's inventory, and commerce.

pub mod catalog;
pub mod inventory;
pub mod logic;
pub mod types;

pub use catalog::{Catalog, CatalogError, Shop};
pub use inventory::Inventory;
pub use logic::{buy_from, purchase, use_item, UseOutcome};
pub use types::{Item, ItemKind};
