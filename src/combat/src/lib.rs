// src/combat/src/lib.rs
//! Character model and turn engine.
//!
//! - [`Attack`] / [`Defence`]: value objects produced by each half-turn
//! - [`Combatant`]: health lifecycle, defence rolls and observer hooks
//! - [`Enemy`] / [`Species`]: the four enemy kinds and their special abilities
//! - [`EnemySpawner`]: decaying weighted enemy selection
//! - [`TurnEngine`]: the attack/defend alternation

pub mod attack;
pub mod combatant;
pub mod enemy;
pub mod engine;
pub mod spawner;


pub use crate::attack::{Attack, Defence};
pub use crate::combatant::{
    ChannelObserver, CharacterEvent, CharacterObserver, CharacterSnapshot, Combatant,
    HealthChange, ObserverId, Observers, Vitals,
};
pub use crate::enemy::{Enemy, SpecialAbility, Species, SpeciesStats};
pub use crate::engine::{
    AttackAction, AttackInput, AttackOption, FirstOption, Phase, Side, TurnContext, TurnEngine,
    TurnReport,
};
pub use crate::spawner::EnemySpawner;
