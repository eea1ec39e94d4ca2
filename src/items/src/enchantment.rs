//src/items/src/enchantment.rs
use rng::RandomSource;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// 武器附魔
///
/// 附魔不能直接装备，只能叠加在武器上。每种附魔定义了三个变换，
/// 输入是链上"下一层"武器报告的数值。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Enchantment {
    #[strum(serialize = "Damage II")]
    DamageII,
    #[strum(serialize = "Damage V")]
    DamageV,
    #[strum(serialize = "Fire Damage")]
    FireDamage,
    #[strum(serialize = "Power")]
    Power,
}

const FLAT_DAMAGE_INC: i32 = 5;
const FIRE_MIN_INC: i32 = 5;
const FIRE_MAX_INC: i32 = 10;
const POWER_MULT: f64 = 1.1;

impl Enchantment {
    /// 附魔自身的价格
    pub fn cost(self) -> i32 {
        match self {
            Enchantment::DamageII => 2,
            Enchantment::DamageV => 5,
            Enchantment::FireDamage => 20,
            Enchantment::Power => 10,
        }
    }

    /// 附魔单独展示时的最小效果
    pub fn min_effect(self) -> i32 {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => FLAT_DAMAGE_INC,
            Enchantment::FireDamage => FIRE_MIN_INC,
            Enchantment::Power => 0,
        }
    }

    /// 附魔单独展示时的最大效果
    pub fn max_effect(self) -> i32 {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => FLAT_DAMAGE_INC,
            Enchantment::FireDamage => FIRE_MAX_INC,
            Enchantment::Power => 0,
        }
    }

    pub fn min_effect_of(self, next: i32) -> i32 {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => next.saturating_add(FLAT_DAMAGE_INC),
            Enchantment::FireDamage => next.saturating_add(FIRE_MIN_INC),
            Enchantment::Power => scale(next),
        }
    }

    pub fn max_effect_of(self, next: i32) -> i32 {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => next.saturating_add(FLAT_DAMAGE_INC),
            Enchantment::FireDamage => next.saturating_add(FIRE_MAX_INC),
            Enchantment::Power => scale(next),
        }
    }

    /// 在下一层的伤害掷骰结果上叠加本附魔
    ///
    /// 火焰附魔每次都会重新掷一个独立的 5..=10 加成。
    pub fn roll_damage_of(self, next: i32, rng: &mut dyn RandomSource) -> i32 {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => next.saturating_add(FLAT_DAMAGE_INC),
            Enchantment::FireDamage => {
                next.saturating_add(rng.range_int(FIRE_MIN_INC, FIRE_MAX_INC))
            }
            Enchantment::Power => scale(next),
        }
    }

    /// 效果描述（用于商店和武器名后缀）
    pub fn description(self) -> String {
        match self {
            Enchantment::DamageII | Enchantment::DamageV => format!("[+{} ATT]", FLAT_DAMAGE_INC),
            Enchantment::FireDamage => format!("[+{}-{} ATT]", FIRE_MIN_INC, FIRE_MAX_INC),
            Enchantment::Power => format!("[x{} ATT]", POWER_MULT),
        }
    }
}

// float -> int casts saturate at the i32 bounds
fn scale(value: i32) -> i32 {
    (value as f64 * POWER_MULT).round() as i32
}
