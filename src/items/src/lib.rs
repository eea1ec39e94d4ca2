//src/items/src/lib.rs
//! 装备模型：武器（含附魔链）、护甲、药水、附魔，以及背包和物品目录。

use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::armour::Armour;
pub use crate::catalog::{CatalogReport, SkippedRecord, load_catalog, parse_catalog};
pub use crate::enchantment::Enchantment;
pub use crate::inventory::Inventory;
pub use crate::potion::{Potion, PotionKind};
pub use crate::weapon::{BaseWeapon, Weapon};

pub mod armour;
pub mod catalog;
pub mod enchantment;
pub mod inventory;
pub mod potion;
pub mod weapon;

/// 物品类型枚举
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    Weapon(Weapon),           // 武器（可带附魔）
    Armour(Armour),           // 护甲
    Potion(Potion),           // 药水
    Enchantment(Enchantment), // 附魔（只能施加在武器上）
}

/// 物品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum ItemCategory {
    Weapon,
    Armour,
    Potion,
    Enchantment,
}

impl Item {
    pub fn name(&self) -> String {
        match self {
            Item::Weapon(w) => w.name().to_string(),
            Item::Armour(a) => a.name.clone(),
            Item::Potion(p) => p.name.clone(),
            Item::Enchantment(e) => e.to_string(),
        }
    }

    /// 物品价格（武器包含附魔链的总价）
    pub fn cost(&self) -> i32 {
        match self {
            Item::Weapon(w) => w.cost(),
            Item::Armour(a) => a.cost,
            Item::Potion(p) => p.cost,
            Item::Enchantment(e) => e.cost(),
        }
    }

    pub fn min_effect(&self) -> i32 {
        match self {
            Item::Weapon(w) => w.min_effect(),
            Item::Armour(a) => a.min_effect,
            Item::Potion(p) => p.min_effect,
            Item::Enchantment(e) => e.min_effect(),
        }
    }

    pub fn max_effect(&self) -> i32 {
        match self {
            Item::Weapon(w) => w.max_effect(),
            Item::Armour(a) => a.max_effect,
            Item::Potion(p) => p.max_effect,
            Item::Enchantment(e) => e.max_effect(),
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Weapon(_) => ItemCategory::Weapon,
            Item::Armour(_) => ItemCategory::Armour,
            Item::Potion(_) => ItemCategory::Potion,
            Item::Enchantment(_) => ItemCategory::Enchantment,
        }
    }

    /// 是否为消耗品
    pub fn is_consumable(&self) -> bool {
        matches!(self, Item::Potion(_))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Weapon(w) => w.fmt(f),
            Item::Armour(a) => a.fmt(f),
            Item::Potion(p) => p.fmt(f),
            Item::Enchantment(e) => write!(f, "{} {} | {}G", e, e.description(), e.cost()),
        }
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<Armour> for Item {
    fn from(armour: Armour) -> Self {
        Item::Armour(armour)
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Item::Potion(potion)
    }
}

impl From<Enchantment> for Item {
    fn from(enchantment: Enchantment) -> Self {
        Item::Enchantment(enchantment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let weapon: Item = Weapon::new("Axe", 30, 6, 12, "Axe", "Slashing")
            .with_enchantment(Enchantment::DamageV)
            .into();
        assert_eq!(weapon.name(), "Axe");
        assert_eq!(weapon.cost(), 35);
        assert_eq!(weapon.min_effect(), 11);
        assert_eq!(weapon.category(), ItemCategory::Weapon);

        let enchant: Item = Enchantment::FireDamage.into();
        assert_eq!(enchant.name(), "Fire Damage");
        assert_eq!((enchant.min_effect(), enchant.max_effect()), (5, 10));
        assert_eq!(enchant.to_string(), "Fire Damage [+5-10 ATT] | 20G");
        assert!(!enchant.is_consumable());
    }
}
