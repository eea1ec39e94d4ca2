// src/combat/src/attack.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one attack, with display-ready description lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    damage: u32,
    lines: Vec<String>,
}

impl Attack {
    /// Negative damage is clamped to zero.
    pub fn new(damage: i32, description: impl Into<String>) -> Self {
        Self {
            damage: damage.max(0) as u32,
            lines: vec![description.into()],
        }
    }

    /// An attack that deals nothing and says nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: u32) {
        self.damage = damage;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Adds the other attack's damage and appends its lines.
    pub fn merge(&mut self, other: Attack) {
        self.damage = self.damage.saturating_add(other.damage);
        self.lines.extend(other.lines);
    }

    pub fn is_miss(&self) -> bool {
        self.damage == 0
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Result of defending against an incoming attack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defence {
    pub incoming: u32,
    pub defence_applied: u32,
    pub damage_taken: u32,
    lines: Vec<String>,
}

impl Defence {
    /// `damage_taken = max(0, incoming - defence_applied)`
    pub fn new(incoming: u32, defence_applied: u32) -> Self {
        Self {
            incoming,
            defence_applied,
            damage_taken: incoming.saturating_sub(defence_applied),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for Defence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
