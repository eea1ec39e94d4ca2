// src/hero/src/lib.rs
//! 玩家角色：装备、背包、金币，以及每回合的攻击选择。

// 核心模块
mod combat;
mod core;
mod equipment;

// 重新导出主要类型
pub use self::{
    combat::{POTION_PREFIX, WEAPON_PREFIX},
    core::{INITIAL_GOLD, INVENTORY_SLOTS, MAX_HEALTH, Player},
    equipment::{Equipment, EquipmentSlot},
};
