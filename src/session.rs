// src/session.rs
//! Owns everything that lives across battles.

use combat::{AttackInput, Combatant, EnemySpawner};
use error::GameError;
use hero::Player;
use items::{Item, load_catalog, parse_catalog};
use rng::GameRng;

use crate::battle::Battle;
use crate::config::GameConfig;
use crate::outcome::BattleOutcome;
use crate::shop::Shop;
use crate::view::BattleView;

/// Catalog used when the config names no file.
pub const DEFAULT_CATALOG: &str = include_str!("../assets/shop.txt");

pub struct GameSession {
    config: GameConfig,
    player: Player,
    spawner: EnemySpawner,
    shop: Shop,
    rng: GameRng,
    battles: u32,
}

impl GameSession {
    /// Stocks the shop from `catalog` and equips the cheapest weapon and
    /// armour in it.
    pub fn new(config: GameConfig, catalog: Vec<Item>) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut shop = Shop::new(config.shop_capacity);
        shop.stock(catalog);

        let mut player = Player::with_limits(
            config.player_name.clone(),
            config.max_health,
            config.starting_gold,
            config.inventory_slots,
        );
        Self::give_starter_equipment(&mut player, &shop)?;

        tracing::info!(
            player = player.name(),
            seed = rng.seed(),
            stock = shop.items().len(),
            "session started"
        );

        Ok(Self {
            config,
            player,
            spawner: EnemySpawner::new(),
            shop,
            rng,
            battles: 0,
        })
    }

    /// Loads the catalog named in the config, or the built-in one.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let report = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => parse_catalog(DEFAULT_CATALOG),
        };
        if !report.skipped.is_empty() {
            tracing::warn!(skipped = report.skipped.len(), "catalog records skipped");
        }
        Self::new(config, report.items)
    }

    fn give_starter_equipment(player: &mut Player, shop: &Shop) -> Result<(), GameError> {
        let weapon = shop
            .items()
            .cheapest_weapon()
            .cloned()
            .ok_or(GameError::MissingStarterItem("weapon"))?;
        let armour = shop
            .items()
            .cheapest_armour()
            .cloned()
            .ok_or(GameError::MissingStarterItem("armour"))?;

        player.give_item(weapon.clone().into())?;
        player.equip_weapon(weapon);
        player.give_item(armour.clone().into())?;
        player.set_armour(armour);
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn spawner(&self) -> &EnemySpawner {
        &self.spawner
    }

    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// Buys the shop entry at `index` for the player.
    pub fn buy(&mut self, index: usize) -> Result<Item, GameError> {
        self.shop.buy(index, &mut self.player)
    }

    /// Sells an item from the player's inventory back to the shop.
    pub fn sell(&mut self, item: &Item) -> Result<i32, GameError> {
        self.shop.sell(item, &mut self.player)
    }

    /// Spawns the next enemy, fights it and settles the result.
    pub fn run_battle(
        &mut self,
        input: &mut dyn AttackInput,
        view: &mut dyn BattleView,
    ) -> BattleOutcome {
        let enemy = self.spawner.spawn(&mut self.rng);
        self.battles += 1;
        Battle::new(&mut self.player, enemy).run(&mut self.rng, input, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::AutoPilot;
    use crate::view::NullView;
    use items::{Armour, Weapon};
    use pretty_assertions::assert_eq;

    fn seeded() -> GameConfig {
        GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_default_catalog_parses() {
        let report = parse_catalog(DEFAULT_CATALOG);
        assert!(report.skipped.is_empty());
        assert!(!report.items.is_empty());
    }

    #[test]
    fn test_new_equips_cheapest() {
        let catalog: Vec<Item> = vec![
            Weapon::new("Great Sword", 60, 10, 15, "Sword", "Slashing").into(),
            Weapon::new("Dagger", 5, 2, 4, "Dagger", "Piercing").into(),
            Armour::new("Plate", 80, 8, 12, "Steel").into(),
            Armour::new("Robe", 3, 0, 1, "Cloth").into(),
        ];
        let session = GameSession::new(seeded(), catalog).unwrap();
        assert_eq!(session.player().weapon().name(), "Dagger");
        assert_eq!(session.player().armour().name, "Robe");
        assert_eq!(session.player().inventory().len(), 2);
        assert_eq!(session.player().gold(), 100);
        assert_eq!(session.shop().items().len(), 8);
    }

    #[test]
    fn test_new_without_weapon_fails() {
        let catalog: Vec<Item> = vec![Armour::new("Robe", 3, 0, 1, "Cloth").into()];
        let result = GameSession::new(seeded(), catalog);
        assert!(matches!(result, Err(GameError::MissingStarterItem("weapon"))));
    }

    #[test]
    fn test_run_battle_settles() {
        let mut session = GameSession::from_config(seeded()).unwrap();
        let outcome = session.run_battle(&mut AutoPilot, &mut NullView);
        assert_eq!(session.battles(), 1);
        assert_eq!(session.spawner().spawned(), 1);
        if outcome.end_game {
            assert!(!session.player().is_alive());
        } else {
            assert_eq!(session.player().gold(), 100 + outcome.gold_awarded);
        }
    }
}
