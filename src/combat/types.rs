use crate::core::constants::*;
use strum::Display;

/// The two opponent archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OpponentKind {
    Monster,
    Dragon,
}

impl OpponentKind {
    /// Chance for this opponent's attack to connect.
    pub fn hit_chance(self) -> f64 {
        match self {
            OpponentKind::Monster => MONSTER_HIT_CHANCE,
            OpponentKind::Dragon => DRAGON_HIT_CHANCE,
        }
    }

    pub fn gold_reward(self) -> u32 {
        match self {
            OpponentKind::Monster => MONSTER_GOLD_REWARD,
            OpponentKind::Dragon => DRAGON_GOLD_REWARD,
        }
    }

    /// (attack_damage, health)
    fn stats(self) -> (u32, u32) {
        match self {
            OpponentKind::Monster => MONSTER_STATS,
            OpponentKind::Dragon => DRAGON_STATS,
        }
    }
}

/// A combat-scoped enemy. Spawned fresh for every fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub kind: OpponentKind,
    pub name: String,
    pub attack_damage: u32,
    pub health: u32,
}

impl Opponent {
    pub fn spawn(kind: OpponentKind) -> Self {
        let (attack_damage, health) = kind.stats();
        let name = match kind {
            OpponentKind::Monster => "Forest Monster",
            OpponentKind::Dragon => "Dragon",
        };
        Self {
            kind,
            name: name.to_string(),
            attack_damage,
            health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Opponent reduced to 0 health.
    Won,
    /// Player reduced to 0 health.
    Lost,
    /// Dragon refused an under-equipped challenger and scorched them.
    Fled,
    /// Player had nothing to fight with and backed away unharmed.
    Retreated,
}

/// One exchange: the player swings, then the opponent answers if still standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLog {
    pub player_hit: bool,
    pub damage_dealt: u32,
    pub opponent_health: u32,
    /// `None` when the opponent fell before its turn.
    pub opponent_hit: Option<bool>,
    pub damage_taken: u32,
    pub player_health: u32,
}

/// Everything that happened in one call to the combat engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    pub opponent: Opponent,
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub rounds: Vec<RoundLog>,
    pub outcome: CombatOutcome,
    pub gold_awarded: u32,
    /// Health lost outside the round loop (the dragon's scorch).
    pub penalty: u32,
}

impl CombatReport {
    pub fn new(opponent: Opponent) -> Self {
        Self {
            opponent,
            weapon: None,
            armor: None,
            rounds: Vec::new(),
            outcome: CombatOutcome::Retreated,
            gold_awarded: 0,
            penalty: 0,
        }
    }

    pub fn player_won(&self) -> bool {
        self.outcome == CombatOutcome::Won
    }

    pub fn total_damage_dealt(&self) -> u32 {
        self.rounds.iter().map(|r| r.damage_dealt).sum()
    }

    pub fn total_damage_taken(&self) -> u32 {
        self.rounds.iter().map(|r| r.damage_taken).sum::<u32>() + self.penalty
    }
}
