//src/items/src/catalog.rs
//! 物品目录解析
//!
//! 每行一条记录，字段以 `", "` 分隔：
//!
//! ```text
//! W, name, minDamage, maxDamage, cost, damageType, weaponType
//! A, name, minDefence, maxDefence, cost, material
//! P, name, minEffect, maxEffect, cost, H|D
//! ```
//!
//! 无效的行会被跳过并记录下来，不会让整个目录加载失败。

use error::{CatalogError, GameError};
use std::path::Path;

use crate::{Armour, Item, Potion, Weapon};

/// 解析结果：有效物品 + 被跳过的行
#[derive(Debug, Default)]
pub struct CatalogReport {
    pub items: Vec<Item>,
    pub skipped: Vec<SkippedRecord>,
}

/// 被跳过的记录（行号从 1 开始）
#[derive(Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: CatalogError,
}

impl SkippedRecord {
    pub fn into_error(self) -> GameError {
        GameError::Catalog {
            line: self.line,
            source: self.reason,
        }
    }
}

/// 解析整个目录文本
pub fn parse_catalog(source: &str) -> CatalogReport {
    let mut report = CatalogReport::default();

    for (index, line) in source.lines().enumerate() {
        let line_num = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok(item) => report.items.push(item),
            Err(reason) => {
                tracing::warn!(line = line_num, %reason, "skipping catalog record");
                report.skipped.push(SkippedRecord {
                    line: line_num,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        loaded = report.items.len(),
        skipped = report.skipped.len(),
        "catalog parsed"
    );
    report
}

/// 从文件读取目录
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogReport, GameError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| GameError::CatalogIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_catalog(&source))
}

/// 解析单条记录
pub fn parse_record(line: &str) -> Result<Item, CatalogError> {
    let fields: Vec<&str> = line.trim_end().split(", ").collect();
    let tag = fields[0].trim();

    match tag.chars().next() {
        Some('W') => {
            expect_fields(&fields, 7)?;
            let min = parse_int("minDamage", fields[2])?;
            let max = parse_int("maxDamage", fields[3])?;
            let cost = parse_int("cost", fields[4])?;
            Ok(Weapon::new(fields[1], cost, min, max, fields[6], fields[5]).into())
        }
        Some('A') => {
            expect_fields(&fields, 6)?;
            let min = parse_int("minDefence", fields[2])?;
            let max = parse_int("maxDefence", fields[3])?;
            let cost = parse_int("cost", fields[4])?;
            Ok(Armour::new(fields[1], cost, min, max, fields[5]).into())
        }
        Some('P') => {
            expect_fields(&fields, 6)?;
            let min = parse_int("minEffect", fields[2])?;
            let max = parse_int("maxEffect", fields[3])?;
            let cost = parse_int("cost", fields[4])?;
            let code = fields[5].trim().chars().next().unwrap_or(' ');
            Potion::new(fields[1], cost, min, max, code)
                .map(Item::from)
                .map_err(|_| CatalogError::PotionKind(fields[5].to_string()))
        }
        _ => Err(CatalogError::UnknownTag(tag.to_string())),
    }
}

fn expect_fields(fields: &[&str], expected: usize) -> Result<(), CatalogError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(CatalogError::FieldCount {
            expected,
            found: fields.len(),
        })
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, CatalogError> {
    value
        .trim()
        .parse()
        .map_err(|_| CatalogError::NotANumber {
            field,
            value: value.to_string(),
        })
}
