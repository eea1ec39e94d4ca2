//src/items/src/weapon.rs
use rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enchantment::Enchantment;

/// 基础武器（来自物品目录，没有附魔）
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct BaseWeapon {
    pub name: String,
    pub cost: i32,
    pub min_effect: i32,
    pub max_effect: i32,
    pub weapon_type: String, // 武器类型（Sword, Axe...）
    pub damage_type: String, // 伤害类型（Slashing, Blunt...）
}

impl BaseWeapon {
    /// 在 min..=max 内均匀掷骰
    pub fn roll_damage(&self, rng: &mut dyn RandomSource) -> i32 {
        rng.range_int(self.min_effect, self.max_effect)
    }
}

/// 可装备的武器：基础武器加上按施加顺序排列的附魔链
///
/// `enchantments[0]` 是最先施加、最内层的附魔。查询时从内向外折叠，
/// 所以最后施加的附魔最后参与计算。
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    base: BaseWeapon,
    enchantments: Vec<Enchantment>,
}

impl Weapon {
    pub fn new(
        name: &str,
        cost: i32,
        min_effect: i32,
        max_effect: i32,
        weapon_type: &str,
        damage_type: &str,
    ) -> Self {
        Self::from_base(BaseWeapon {
            name: name.to_string(),
            cost,
            min_effect,
            max_effect,
            weapon_type: weapon_type.to_string(),
            damage_type: damage_type.to_string(),
        })
    }

    pub fn from_base(base: BaseWeapon) -> Self {
        Self {
            base,
            enchantments: Vec::new(),
        }
    }

    /// 玩家尚未装备任何武器时使用的占位武器
    pub fn placeholder() -> Self {
        Self::new("Default Sword", 0, 0, 0, "Sword", "Useless")
    }

    /// 在最外层叠加一个附魔
    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }

    pub fn base(&self) -> &BaseWeapon {
        &self.base
    }

    /// 附魔链（按施加顺序）
    pub fn enchantments(&self) -> &[Enchantment] {
        &self.enchantments
    }

    pub fn is_enchanted(&self) -> bool {
        !self.enchantments.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn weapon_type(&self) -> &str {
        &self.base.weapon_type
    }

    pub fn damage_type(&self) -> &str {
        &self.base.damage_type
    }

    /// 总价 = 基础武器价格 + 每个附魔的价格
    pub fn cost(&self) -> i32 {
        self.enchantments
            .iter()
            .fold(self.base.cost, |total, e| total.saturating_add(e.cost()))
    }

    pub fn min_effect(&self) -> i32 {
        self.enchantments
            .iter()
            .fold(self.base.min_effect, |next, e| e.min_effect_of(next))
    }

    pub fn max_effect(&self) -> i32 {
        self.enchantments
            .iter()
            .fold(self.base.max_effect, |next, e| e.max_effect_of(next))
    }

    /// 掷出一次伤害：先掷基础武器，再由内向外逐层应用附魔
    pub fn roll_damage(&self, rng: &mut dyn RandomSource) -> i32 {
        let base_roll = self.base.roll_damage(rng);
        self.enchantments
            .iter()
            .fold(base_roll, |next, e| e.roll_damage_of(next, rng))
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | ATT: {}-{}",
            self.base.name,
            self.base.damage_type,
            self.base.weapon_type,
            self.base.min_effect,
            self.base.max_effect
        )?;
        for enchantment in &self.enchantments {
            write!(f, " | {} {}", enchantment, enchantment.description())?;
        }
        write!(f, " | {}G", self.cost())
    }
}
