// src/rng/src/lib.rs
//! Random number service shared by every combat component.
//!
//! All randomness flows through [`RandomSource`] so that a single long-lived
//! generator can be injected into the engine and swapped for a
//! [`ScriptedRng`] in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the three draws the combat engine needs.
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Reversed bounds are swapped.
    fn range_int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.unit() < p
    }

    /// Picks an index with probability proportional to its weight.
    ///
    /// Returns `None` when there is nothing to pick from.
    fn weighted_pick(&mut self, weights: &[f64]) -> Option<usize> {
        let roll = self.unit();
        pick_weighted_index(weights, roll)
    }
}

/// Resolves a `[0, 1)` roll against a weight vector.
///
/// Weights are normalised first, negative weights count as zero. If float
/// rounding leaves the roll above the final cumulative sum the last bucket with
/// a positive weight wins.
pub fn pick_weighted_index(weights: &[f64], roll: f64) -> Option<usize> {
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if weights.is_empty() || total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        let weight = weight.max(0.0);
        cumulative += weight / total;
        if weight > 0.0 && roll < cumulative {
            return Some(index);
        }
    }

    weights.iter().rposition(|w| *w > 0.0)
}

/// Seedable PCG generator used for real games.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the thread rng.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the sequence from the current seed.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }
}

impl RandomSource for GameRng {
    fn range_int(&mut self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(low..=high)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays queued values, for tests that need to force an outcome.
///
/// Queued integers are clamped into the requested range. Once a queue runs dry
/// integers fall back to the lower bound and unit draws to `fallback_unit`
/// (just below 1.0 by default, so chance checks fail).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    ints: VecDeque<i32>,
    units: VecDeque<f64>,
    fallback_unit: f64,
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self {
            ints: VecDeque::new(),
            units: VecDeque::new(),
            fallback_unit: 0.999_999,
        }
    }
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    pub fn with_fallback_unit(mut self, unit: f64) -> Self {
        self.fallback_unit = unit;
        self
    }

    pub fn push_int(&mut self, value: i32) {
        self.ints.push_back(value);
    }

    pub fn push_unit(&mut self, value: f64) {
        self.units.push_back(value);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.ints.len() + self.units.len()
    }
}

impl RandomSource for ScriptedRng {
    fn range_int(&mut self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.ints.pop_front().map_or(low, |v| v.clamp(low, high))
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(self.fallback_unit)
    }
}
