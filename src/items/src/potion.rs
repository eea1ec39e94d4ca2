//src/items/src/potion.rs
use error::GameError;
use rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

/// 药水极性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PotionKind {
    Healing,
    Damage,
}

impl PotionKind {
    /// 目录文件中使用的单字母代码
    pub fn code(self) -> char {
        match self {
            PotionKind::Healing => 'H',
            PotionKind::Damage => 'D',
        }
    }
}

impl TryFrom<char> for PotionKind {
    type Error = GameError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'H' => Ok(PotionKind::Healing),
            'D' => Ok(PotionKind::Damage),
            other => Err(GameError::InvalidPotionKind(other)),
        }
    }
}

/// 药水（一次性消耗品）
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub cost: i32,
    pub min_effect: i32,
    pub max_effect: i32,
    pub kind: PotionKind,
}

impl Potion {
    /// 按目录代码构造药水，代码不是 H/D 时立即失败
    pub fn new(
        name: &str,
        cost: i32,
        min_effect: i32,
        max_effect: i32,
        code: char,
    ) -> Result<Self, GameError> {
        let kind = PotionKind::try_from(code)?;
        Ok(Self::with_kind(name, cost, min_effect, max_effect, kind))
    }

    pub fn with_kind(
        name: &str,
        cost: i32,
        min_effect: i32,
        max_effect: i32,
        kind: PotionKind,
    ) -> Self {
        Self {
            name: name.to_string(),
            cost,
            min_effect,
            max_effect,
            kind,
        }
    }

    pub fn is_healing(&self) -> bool {
        self.kind == PotionKind::Healing
    }

    /// 掷出药水效果（治疗量或伤害）
    pub fn roll_effect(&self, rng: &mut dyn RandomSource) -> i32 {
        rng.range_int(self.min_effect, self.max_effect)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            PotionKind::Healing => "HEL",
            PotionKind::Damage => "ATT",
        };
        write!(
            f,
            "{} | {}: {}-{} | {}G",
            self.name, prefix, self.min_effect, self.max_effect, self.cost
        )
    }
}
