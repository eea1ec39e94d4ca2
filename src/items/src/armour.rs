//src/items/src/armour.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// 护甲：效果范围即防御范围
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Armour {
    pub name: String,
    pub cost: i32,
    pub min_effect: i32,
    pub max_effect: i32,
    pub material: String, // 材质
}

impl Armour {
    pub fn new(name: &str, cost: i32, min_effect: i32, max_effect: i32, material: &str) -> Self {
        Self {
            name: name.to_string(),
            cost,
            min_effect,
            max_effect,
            material: material.to_string(),
        }
    }

    /// 玩家尚未装备护甲时使用的占位护甲
    pub fn placeholder() -> Self {
        Self::new("Default Armour", 0, 0, 0, "Scraps")
    }
}

impl fmt::Display for Armour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | DEF: {}-{} | {}G",
            self.name, self.material, self.min_effect, self.max_effect, self.cost
        )
    }
}
