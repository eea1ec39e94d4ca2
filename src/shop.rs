// src/shop.rs
//! Buying and selling. The shop only touches the player's gold and inventory.

use combat::Combatant;
use error::{GameError, InventoryError};
use hero::Player;
use items::{Enchantment, Inventory, Item};
use strum::IntoEnumIterator;

pub const SHOP_CAPACITY: usize = 100;
/// Share of an item's cost paid back when selling.
pub const SELL_RATE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Shop {
    stock: Inventory,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(SHOP_CAPACITY)
    }
}

impl Shop {
    pub fn new(capacity: usize) -> Self {
        Self {
            stock: Inventory::new(capacity),
        }
    }

    /// Replaces the stock with the catalog plus one of every enchantment.
    pub fn stock(&mut self, catalog: impl IntoIterator<Item = Item>) {
        self.stock.clear();
        let added = self.stock.add_all(catalog);
        let enchantments = self.stock.add_all(Enchantment::iter().map(Item::Enchantment));
        tracing::debug!(items = added, enchantments, "shop stocked");
    }

    pub fn items(&self) -> &Inventory {
        &self.stock
    }

    /// Stock entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.stock.get(index)
    }

    pub fn sell_price(item: &Item) -> i32 {
        (item.cost() as f64 * SELL_RATE).floor() as i32
    }

    /// Sells a copy of the stock entry at `index` to the player.
    pub fn buy(&self, index: usize, player: &mut Player) -> Result<Item, GameError> {
        let item = self
            .stock
            .get(index)
            .ok_or(InventoryError::InvalidIndex(index))?;

        if player.gold() < item.cost() {
            return Err(GameError::InsufficientGold {
                needed: item.cost(),
                available: player.gold(),
            });
        }
        if !player.has_inventory_space() {
            return Err(InventoryError::Full.into());
        }

        player.modify_gold(item.cost().saturating_neg());
        player.give_item(item.clone())?;
        tracing::info!(item = %item.name(), cost = item.cost(), gold = player.gold(), "bought");
        Ok(item.clone())
    }

    /// Takes the item from the player and pays half its cost, rounded down.
    pub fn sell(&self, item: &Item, player: &mut Player) -> Result<i32, GameError> {
        let sold = player.take_item(item)?;
        let price = Self::sell_price(&sold);
        player.modify_gold(price);
        tracing::info!(item = %sold.name(), price, gold = player.gold(), "sold");
        Ok(price)
    }
}
