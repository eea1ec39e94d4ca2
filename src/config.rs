// src/config.rs
//! Game settings, loaded from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use error::GameError;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "COMBAT_GAME_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    /// Fixed RNG seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    pub inventory_slots: usize,
    pub starting_gold: i32,
    pub max_health: u32,
    pub shop_capacity: usize,
    /// Item catalog file; the built-in catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            seed: None,
            inventory_slots: hero::INVENTORY_SLOTS,
            starting_gold: hero::INITIAL_GOLD,
            max_health: hero::MAX_HEALTH,
            shop_capacity: crate::shop::SHOP_CAPACITY,
            catalog_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Applies `COMBAT_GAME_SEED` if it holds a valid number.
    pub fn apply_env(&mut self) {
        self.apply_seed_override(std::env::var(SEED_ENV).ok().as_deref());
    }

    fn apply_seed_override(&mut self, value: Option<&str>) {
        let Some(value) = value else { return };
        match value.trim().parse() {
            Ok(seed) => self.seed = Some(seed),
            Err(_) => tracing::warn!(%value, "ignoring non-numeric {}", SEED_ENV),
        }
    }
}
