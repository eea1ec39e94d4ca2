// src/lib.rs
//! Turn-based combat game: a player buys gear, fights a drifting stream of
//! enemies and either dies or slays the dragon.
//!
//! The engine lives in the workspace crates (`rng`, `items`, `combat`,
//! `hero`); this crate wires them into battles and a session.

pub mod autopilot;
pub mod battle;
pub mod config;
pub mod outcome;
pub mod session;
pub mod shop;
pub mod view;

pub use crate::autopilot::AutoPilot;
pub use crate::battle::Battle;
pub use crate::config::GameConfig;
pub use crate::outcome::{BattleOutcome, Loser, settle};
pub use crate::session::{DEFAULT_CATALOG, GameSession};
pub use crate::shop::Shop;
pub use crate::view::{BattleView, LogView, NullView};
