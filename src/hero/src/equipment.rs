// src/hero/src/equipment.rs
use items::{Armour, Weapon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// 装备位
#[derive(Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armour,
}

/// 当前装备；两个槽位始终有物品，初始为占位装备
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Weapon,
    pub armour: Armour,
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}

impl Equipment {
    /// "Default Sword" 与 "Default Armour"，攻防均为 0
    pub fn new() -> Self {
        Self {
            weapon: Weapon::placeholder(),
            armour: Armour::placeholder(),
        }
    }

    /// 装备武器，返回被替换的旧武器
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        std::mem::replace(&mut self.weapon, weapon)
    }

    /// 装备护甲，返回被替换的旧护甲
    pub fn equip_armour(&mut self, armour: Armour) -> Armour {
        std::mem::replace(&mut self.armour, armour)
    }

    /// 攻击区间来自武器（含附魔链）
    pub fn attack_range(&self) -> (i32, i32) {
        (self.weapon.min_effect(), self.weapon.max_effect())
    }

    /// 防御区间来自护甲
    pub fn defence_range(&self) -> (i32, i32) {
        (self.armour.min_effect, self.armour.max_effect)
    }

    /// 某个槽位上物品的名称
    pub fn slot_name(&self, slot: EquipmentSlot) -> &str {
        match slot {
            EquipmentSlot::Weapon => self.weapon.name(),
            EquipmentSlot::Armour => &self.armour.name,
        }
    }
}
