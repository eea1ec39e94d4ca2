// src/hero/src/core.rs
use combat::{Observers, Vitals};
use error::{GameError, InventoryError};
use items::{Armour, Enchantment, Inventory, Item, Weapon};

use crate::equipment::Equipment;

/// 玩家生命上限
pub const MAX_HEALTH: u32 = 30;
/// 初始金币
pub const INITIAL_GOLD: i32 = 100;
/// 背包格数
pub const INVENTORY_SLOTS: usize = 15;

/// 玩家角色
#[derive(Debug)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) vitals: Vitals,
    pub(crate) gold: i32,
    pub(crate) inventory: Inventory,
    pub(crate) equipment: Equipment,
    pub(crate) observers: Observers,
}

impl Player {
    /// 默认属性：30 生命、100 金币、15 格背包
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_limits(name, MAX_HEALTH, INITIAL_GOLD, INVENTORY_SLOTS)
    }

    /// 自定义生命上限、初始金币与背包格数
    pub fn with_limits(
        name: impl Into<String>,
        max_health: u32,
        gold: i32,
        inventory_slots: usize,
    ) -> Self {
        Self {
            name: name.into(),
            vitals: Vitals::new(max_health),
            gold,
            inventory: Inventory::new(inventory_slots),
            equipment: Equipment::new(),
            observers: Observers::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// 增减金币，负数表示扣除
    pub fn modify_gold(&mut self, amount: i32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn weapon(&self) -> &Weapon {
        &self.equipment.weapon
    }

    pub fn armour(&self) -> &Armour {
        &self.equipment.armour
    }

    /// 放入背包
    pub fn give_item(&mut self, item: Item) -> Result<(), GameError> {
        self.inventory.add(item)?;
        Ok(())
    }

    /// 从背包取出第一个相同的物品
    pub fn take_item(&mut self, item: &Item) -> Result<Item, GameError> {
        Ok(self.inventory.remove_item(item)?)
    }

    pub fn has_inventory_space(&self) -> bool {
        !self.inventory.is_full()
    }

    /// 装备武器，返回原武器
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        tracing::debug!(player = %self.name, weapon = weapon.name(), "weapon equipped");
        self.equipment.equip_weapon(weapon)
    }

    /// 装备护甲，返回原护甲
    pub fn set_armour(&mut self, armour: Armour) -> Armour {
        tracing::debug!(player = %self.name, armour = %armour.name, "armour equipped");
        self.equipment.equip_armour(armour)
    }

    /// 用背包里的附魔强化当前武器
    ///
    /// 附魔和旧武器从背包移除，强化后的武器放回背包并装备。
    /// 背包里没有这个附魔时不做任何修改。
    pub fn enchant_weapon(&mut self, enchantment: Enchantment) -> Result<(), GameError> {
        self.inventory
            .remove_item(&Item::Enchantment(enchantment))?;

        let current = Item::Weapon(self.equipment.weapon.clone());
        match self.inventory.remove_item(&current) {
            // 占位武器不在背包中
            Ok(_) | Err(InventoryError::ItemNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let enchanted = self.equipment.weapon.clone().with_enchantment(enchantment);
        // 刚移除了附魔，必有空位
        self.inventory.add(Item::Weapon(enchanted.clone()))?;
        self.equipment.equip_weapon(enchanted);

        tracing::info!(
            player = %self.name,
            enchantment = %enchantment,
            cost = self.equipment.weapon.cost(),
            "weapon enchanted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::Combatant;
    use pretty_assertions::assert_eq;

    fn sword() -> Weapon {
        Weapon::new("Short Sword", 10, 5, 10, "Sword", "Slashing")
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Rohan");
        assert_eq!(player.health(), 30);
        assert_eq!(player.max_health(), 30);
        assert_eq!(player.gold(), 100);
        assert_eq!(player.inventory().capacity(), 15);
        assert_eq!(player.weapon().name(), "Default Sword");
        assert_eq!(player.armour().name, "Default Armour");
        assert_eq!((player.min_attack(), player.max_attack()), (0, 0));
    }

    #[test]
    fn test_modify_gold() {
        let mut player = Player::new("Rohan");
        player.modify_gold(40);
        assert_eq!(player.gold(), 140);
        player.modify_gold(-150);
        assert_eq!(player.gold(), -10);
    }

    #[test]
    fn test_give_and_take() {
        let mut player = Player::with_limits("Rohan", 30, 100, 1);
        player.give_item(sword().into()).unwrap();
        assert!(!player.has_inventory_space());
        assert!(matches!(
            player.give_item(Enchantment::Power.into()),
            Err(GameError::Inventory(InventoryError::Full))
        ));

        let taken = player.take_item(&sword().into()).unwrap();
        assert_eq!(taken.name(), "Short Sword");
        assert!(player.has_inventory_space());
        assert!(player.take_item(&sword().into()).is_err());
    }

    #[test]
    fn test_equipment_drives_stats() {
        let mut player = Player::new("Rohan");
        player.equip_weapon(sword());
        player.set_armour(Armour::new("Chainmail", 30, 3, 7, "Steel"));
        assert_eq!((player.min_attack(), player.max_attack()), (5, 10));
        assert_eq!((player.min_defence(), player.max_defence()), (3, 7));
    }

    #[test]
    fn test_enchant_weapon_replaces_inventory_copy() {
        let mut player = Player::new("Rohan");
        player.give_item(sword().into()).unwrap();
        player.equip_weapon(sword());
        player.give_item(Enchantment::FireDamage.into()).unwrap();
        player.give_item(Enchantment::Power.into()).unwrap();

        player.enchant_weapon(Enchantment::FireDamage).unwrap();
        player.enchant_weapon(Enchantment::Power).unwrap();

        assert_eq!(player.weapon().cost(), 40);
        assert_eq!(
            player.weapon().enchantments(),
            [Enchantment::FireDamage, Enchantment::Power]
        );
        assert_eq!(player.inventory().len(), 1);
        assert_eq!(player.inventory().weapons()[0], player.weapon());
        assert!(player.inventory().enchantments().is_empty());
    }

    #[test]
    fn test_enchant_placeholder_weapon() {
        let mut player = Player::new("Rohan");
        player.give_item(Enchantment::DamageII.into()).unwrap();
        player.enchant_weapon(Enchantment::DamageII).unwrap();
        assert_eq!(player.min_attack(), 5);
        assert_eq!(player.inventory().weapons().len(), 1);
    }

    #[test]
    fn test_enchant_without_enchantment_fails() {
        let mut player = Player::new("Rohan");
        player.equip_weapon(sword());
        let result = player.enchant_weapon(Enchantment::DamageV);
        assert!(matches!(
            result,
            Err(GameError::Inventory(InventoryError::ItemNotFound))
        ));
        assert!(!player.weapon().is_enchanted());
    }
}
