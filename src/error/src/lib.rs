//! 游戏错误处理模块
//!
//! Errors raised while loading the item catalog, reading configuration and
//! moving items between the player, the shop and the inventory. The combat
//! engine itself has no failure modes.

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 药水类型无效（只接受 H / D）
    #[error("Illegal potion type: {0:?}")]
    InvalidPotionKind(char),

    /// 物品目录中的某一行无效
    #[error("Catalog line {line}: {source}")]
    Catalog {
        line: usize,
        #[source]
        source: CatalogError,
    },

    /// 读取物品目录文件失败
    #[error("Error loading items from {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 背包错误
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// 金币不足
    #[error("Not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: i32, available: i32 },

    /// 目录中没有可用的初始装备
    #[error("Catalog has no {0} to start with")]
    MissingStarterItem(&'static str),
}

/// 背包系统错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Not enough inventory space. Sell an item to make room.")]
    Full,
    #[error("Item not found in inventory")]
    ItemNotFound,
    #[error("Invalid inventory index {0}")]
    InvalidIndex(usize),
}

/// Why a single catalog record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown item tag {0:?}")]
    UnknownTag(String),
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("illegal potion type {0:?}")]
    PotionKind(String),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InsufficientGold { .. } => "Not enough gold.".to_string(),
        GameError::Inventory(InventoryError::Full) => {
            "Not enough inventory space. Sell an item to make room.".to_string()
        }
        GameError::CatalogIo { path, source } => match source.kind() {
            std::io::ErrorKind::NotFound => format!("Item file {} does not exist", path),
            _ => format!("Could not load shop item data:\n{}", error),
        },
        GameError::Config(e) => format!("Config file is invalid ({})", e),
        _ => error.to_string(),
    }
}
