// src/combat/src/enemy.rs

use rng::RandomSource;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::attack::Attack;
use crate::combatant::{Combatant, Observers, Vitals};
use crate::engine::TurnContext;

/// Post-processing applied to a freshly rolled enemy attack.
pub type SpecialAbility = fn(&mut Enemy, Attack, &mut dyn RandomSource) -> Attack;

/// Constant stats of one species.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesStats {
    pub name: &'static str,
    pub min_defence: i32,
    pub max_defence: i32,
    pub max_health: u32,
    pub min_attack: i32,
    pub max_attack: i32,
    pub gold_reward: i32,
    pub ability: SpecialAbility,
}

/// Enemy species, weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Species {
    Slime,
    Goblin,
    Ogre,
    Dragon,
}

// Special ability constants
const SLIME_SLIP_CHANCE: f64 = 0.2;
const GOBLIN_SWING_CHANCE: f64 = 0.5;
const GOBLIN_SWING_BONUS: u32 = 3;
const OGRE_AGAIN_CHANCE: f64 = 0.2;
const DRAGON_ABILITY_CHANCE: f64 = 0.35;
const DRAGON_DOUBLE_CHANCE: f64 = 0.25;
const DRAGON_HEAL: i32 = 10;

static SLIME: SpeciesStats = SpeciesStats {
    name: "Slime",
    min_defence: 0,
    max_defence: 2,
    max_health: 10,
    min_attack: 3,
    max_attack: 5,
    gold_reward: 10,
    ability: slime_slip,
};

static GOBLIN: SpeciesStats = SpeciesStats {
    name: "Goblin",
    min_defence: 4,
    max_defence: 8,
    max_health: 30,
    min_attack: 3,
    max_attack: 8,
    gold_reward: 20,
    ability: goblin_swing,
};

static OGRE: SpeciesStats = SpeciesStats {
    name: "Ogre",
    min_defence: 6,
    max_defence: 12,
    max_health: 40,
    min_attack: 5,
    max_attack: 10,
    gold_reward: 40,
    ability: ogre_attack_again,
};

static DRAGON: SpeciesStats = SpeciesStats {
    name: "Dragon",
    min_defence: 15,
    max_defence: 20,
    max_health: 100,
    min_attack: 15,
    max_attack: 30,
    gold_reward: 100,
    ability: dragon_fury,
};

impl Species {
    pub const ALL: [Species; 4] = [Species::Slime, Species::Goblin, Species::Ogre, Species::Dragon];

    pub fn stats(self) -> &'static SpeciesStats {
        match self {
            Species::Slime => &SLIME,
            Species::Goblin => &GOBLIN,
            Species::Ogre => &OGRE,
            Species::Dragon => &DRAGON,
        }
    }

    /// Position in the spawn weight table.
    pub fn index(self) -> usize {
        match self {
            Species::Slime => 0,
            Species::Goblin => 1,
            Species::Ogre => 2,
            Species::Dragon => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Species> {
        Self::ALL.get(index).copied()
    }

    /// Defeating the boss completes the game.
    pub fn is_boss(self) -> bool {
        self == Species::Dragon
    }
}

/// 20%: slips, the attack deals nothing.
fn slime_slip(enemy: &mut Enemy, mut attack: Attack, rng: &mut dyn RandomSource) -> Attack {
    if rng.chance(SLIME_SLIP_CHANCE) {
        attack.set_damage(0);
        attack.log(format!("{} slipped and their attack failed.", enemy.name()));
    }
    attack
}

/// 50%: swings harder for +3.
fn goblin_swing(enemy: &mut Enemy, mut attack: Attack, rng: &mut dyn RandomSource) -> Attack {
    if rng.chance(GOBLIN_SWING_CHANCE) {
        attack.set_damage(attack.damage() + GOBLIN_SWING_BONUS);
        attack.log(format!("{} swung harder, gaining 3DP", enemy.name()));
    }
    attack
}

/// 20%: performs another full attack and merges it in.
fn ogre_attack_again(enemy: &mut Enemy, mut attack: Attack, rng: &mut dyn RandomSource) -> Attack {
    if rng.chance(OGRE_AGAIN_CHANCE) {
        attack.log(format!("{} attacks again!", enemy.name()));
        let again = enemy.strike(rng);
        attack.merge(again);
    }
    attack
}

/// 35%: doubles the attack (25 in 35) or recovers 10HP (10 in 35).
fn dragon_fury(enemy: &mut Enemy, mut attack: Attack, rng: &mut dyn RandomSource) -> Attack {
    if rng.chance(DRAGON_ABILITY_CHANCE) {
        if rng.chance(DRAGON_DOUBLE_CHANCE / DRAGON_ABILITY_CHANCE) {
            attack.set_damage(attack.damage() * 2);
            attack.log(format!("{}'s attack doubled.", enemy.name()));
        } else {
            enemy.modify_health(DRAGON_HEAL);
            attack.log(format!("{} recovered 10HP.", enemy.name()));
        }
    }
    attack
}

/// An enemy in a single battle.
#[derive(Debug)]
pub struct Enemy {
    species: Species,
    vitals: Vitals,
    observers: Observers,
}

impl Enemy {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            vitals: Vitals::new(species.stats().max_health),
            observers: Observers::new(),
        }
    }

    /// Starts below full health.
    pub fn with_health(species: Species, health: u32) -> Self {
        Self {
            species,
            vitals: Vitals::with_health(health, species.stats().max_health),
            observers: Observers::new(),
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn stats(&self) -> &'static SpeciesStats {
        self.species.stats()
    }

    /// Rolls damage, applies the species ability and appends the summary.
    pub fn strike(&mut self, rng: &mut dyn RandomSource) -> Attack {
        self.notify_attack();

        let stats = self.stats();
        let damage = rng.range_int(stats.min_attack, stats.max_attack);
        let attack = Attack::new(damage, format!("{} attacks!", stats.name));
        let mut attack = (stats.ability)(self, attack, rng);
        attack.log(format!(
            "{} attacked, dealing {}DP.",
            stats.name,
            attack.damage()
        ));
        attack
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        self.stats().name
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    fn min_attack(&self) -> i32 {
        self.stats().min_attack
    }

    fn max_attack(&self) -> i32 {
        self.stats().max_attack
    }

    fn min_defence(&self) -> i32 {
        self.stats().min_defence
    }

    fn max_defence(&self) -> i32 {
        self.stats().max_defence
    }

    fn gold(&self) -> i32 {
        self.stats().gold_reward
    }

    fn attack(&mut self, ctx: &mut TurnContext<'_>) -> Attack {
        self.strike(ctx.rng)
    }
}
