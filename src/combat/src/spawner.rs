// src/combat/src/spawner.rs
//! Weighted enemy selection with per-spawn difficulty drift.

use rng::RandomSource;

use crate::enemy::{Enemy, Species};

/// Spawn balance (matches the original encounter table)
mod constants {
    pub const INITIAL_WEIGHTS: [f64; 4] = [0.50, 0.30, 0.20, 0.00]; // Slime, Goblin, Ogre, Dragon
    pub const DECAY_STEP: f64 = 0.05; // Taken from each regular species per spawn
    pub const MIN_WEIGHT: f64 = 0.05; // Regular species never drop below this
}

pub use constants::{DECAY_STEP, INITIAL_WEIGHTS, MIN_WEIGHT};

/// Picks enemies from a decaying probability table.
///
/// After every spawn each regular species loses [`DECAY_STEP`] (never going
/// below [`MIN_WEIGHT`]) and the boss weight takes up the rest, so the table
/// always sums to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawner {
    weights: [f64; 4],
    spawned: u32,
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemySpawner {
    pub fn new() -> Self {
        Self::with_weights(INITIAL_WEIGHTS)
    }

    /// Starts from custom weights, normalised to sum to 1.
    pub fn with_weights(weights: [f64; 4]) -> Self {
        let clamped = weights.map(|w| w.max(0.0));
        let total: f64 = clamped.iter().sum();
        let weights = if total > 0.0 {
            clamped.map(|w| w / total)
        } else {
            INITIAL_WEIGHTS
        };
        Self { weights, spawned: 0 }
    }

    pub fn weights(&self) -> [f64; 4] {
        self.weights
    }

    pub fn probability(&self, species: Species) -> f64 {
        self.weights[species.index()]
    }

    /// Number of enemies spawned so far.
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Picks a species, builds the enemy and decays the table.
    pub fn spawn(&mut self, rng: &mut dyn RandomSource) -> Enemy {
        let species = rng
            .weighted_pick(&self.weights)
            .and_then(Species::from_index)
            .unwrap_or(Species::Slime);

        self.spawned += 1;
        tracing::info!(
            species = %species,
            spawn = self.spawned,
            weights = ?self.weights,
            "enemy spawned"
        );

        self.decay();
        Enemy::new(species)
    }

    /// Shifts weight from the regular species to the boss.
    pub fn decay(&mut self) {
        let (regular, boss) = self.weights.split_at_mut(3);
        for weight in regular.iter_mut() {
            if *weight > MIN_WEIGHT {
                *weight = (*weight - DECAY_STEP).max(MIN_WEIGHT);
            }
        }
        let regular_total: f64 = regular.iter().sum();
        boss[0] = (1.0 - regular_total).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Combatant;
    use proptest::prelude::*;
    use rng::{GameRng, ScriptedRng};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_initial_table() {
        let spawner = EnemySpawner::new();
        assert_eq!(spawner.weights(), [0.5, 0.3, 0.2, 0.0]);
        assert_eq!(spawner.probability(Species::Dragon), 0.0);
    }

    #[test]
    fn test_each_regular_species_decays() {
        let mut spawner = EnemySpawner::new();
        spawner.decay();
        let w = spawner.weights();
        assert!((w[0] - 0.45).abs() < EPSILON);
        assert!((w[1] - 0.25).abs() < EPSILON);
        assert!((w[2] - 0.15).abs() < EPSILON);
        assert!((w[3] - 0.15).abs() < EPSILON);
    }

    #[test]
    fn test_decay_floors_at_minimum() {
        let mut spawner = EnemySpawner::new();
        for _ in 0..50 {
            spawner.decay();
        }
        let w = spawner.weights();
        for weight in &w[..3] {
            assert!((weight - MIN_WEIGHT).abs() < EPSILON);
        }
        assert!((w[3] - 0.85).abs() < EPSILON);
    }

    #[test]
    fn test_spawn_follows_roll() {
        let mut spawner = EnemySpawner::new();
        // 0.6 falls in the goblin bucket [0.5, 0.8)
        let mut rng = ScriptedRng::new().with_units([0.6]);
        let enemy = spawner.spawn(&mut rng);
        assert_eq!(enemy.species(), Species::Goblin);
        assert_eq!(enemy.health(), 30);
        assert_eq!(spawner.spawned(), 1);
    }

    #[test]
    fn test_dragon_never_first() {
        let mut spawner = EnemySpawner::new();
        let mut rng = ScriptedRng::new().with_units([0.999_999_9]);
        assert_eq!(spawner.spawn(&mut rng).species(), Species::Ogre);
        // after one decay the top of the range belongs to the dragon
        let mut rng = ScriptedRng::new().with_units([0.99]);
        assert_eq!(spawner.spawn(&mut rng).species(), Species::Dragon);
    }

    #[test]
    fn test_custom_weights_normalised() {
        let spawner = EnemySpawner::with_weights([2.0, 1.0, 1.0, 0.0]);
        assert!((spawner.probability(Species::Slime) - 0.5).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn weights_always_sum_to_one(spawns in 0usize..60, seed in any::<u64>()) {
            let mut spawner = EnemySpawner::new();
            let mut rng = GameRng::new(seed);
            for _ in 0..spawns {
                spawner.spawn(&mut rng);
                let w = spawner.weights();
                prop_assert!((w.iter().sum::<f64>() - 1.0).abs() < EPSILON);
                prop_assert!(w.iter().all(|x| *x >= 0.0));
            }
        }
    }
}
