// Starting player stats
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_GOLD: u32 = 20;
pub const MAX_HEALTH: u32 = 100;
pub const MIN_HEALTH: u32 = 0;

// Hit chances (a uniform roll in [0, 1) below the threshold connects)
pub const PLAYER_HIT_CHANCE: f64 = 0.7;
pub const MONSTER_HIT_CHANCE: f64 = 0.6;
pub const DRAGON_HIT_CHANCE: f64 = 0.7;

// Opponent archetypes: (attack_damage, health)
pub const MONSTER_STATS: (u32, u32) = (10, 10);
pub const DRAGON_STATS: (u32, u32) = (20, 50);

// Armor can soften a blow but never cancel it
pub const MIN_MITIGATED_DAMAGE: u32 = 1;

// Rewards
pub const MONSTER_GOLD_REWARD: u32 = 10;
pub const DRAGON_GOLD_REWARD: u32 = 100;

// Walking into the dragon's lair under-equipped
pub const DRAGON_SCORCH_PENALTY: u32 = 70;

// Equipment the dragon cave demands
pub const DRAGON_WEAPON_NAME: &str = "Steel Sword";
