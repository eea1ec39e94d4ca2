// src/combat/src/engine.rs
//! Turn resolution between two combatants.
//!
//! A half-turn is `attack` followed by `defend` when the attack dealt any
//! damage. [`TurnEngine::run`] alternates half-turns, first combatant acting
//! first, until one side is dead.

use rng::RandomSource;

use crate::attack::{Attack, Defence};
use crate::combatant::{CharacterSnapshot, Combatant};

/// One entry of the player's attack menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOption {
    pub label: String,
    pub action: AttackAction,
}

/// What an attack option does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackAction {
    /// Swing the equipped weapon.
    Weapon,
    /// Use the potion at this inventory slot.
    Potion { slot: usize, healing: bool },
}

/// Blocking source of the player's attack choice.
///
/// This is the only point where the engine waits on the outside world.
pub trait AttackInput {
    /// Returns the index of the chosen option.
    fn choose_attack(&mut self, chooser: &CharacterSnapshot, options: &[AttackOption]) -> usize;
}

/// Input for battles with no human side; always picks the first option.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOption;

impl AttackInput for FirstOption {
    fn choose_attack(&mut self, _chooser: &CharacterSnapshot, _options: &[AttackOption]) -> usize {
        0
    }
}

/// Collaborators a combatant may need while attacking.
pub struct TurnContext<'a> {
    pub rng: &'a mut dyn RandomSource,
    pub input: &'a mut dyn AttackInput,
}

impl<'a> TurnContext<'a> {
    pub fn new(rng: &'a mut dyn RandomSource, input: &'a mut dyn AttackInput) -> Self {
        Self { rng, input }
    }
}

/// Where the engine is within the current half-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Attacking,
    Defending,
    /// One side is dead; no further turns are taken.
    Finished,
}

/// Which side of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Outcome of a single half-turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: Side,
    pub attack: Attack,
    /// `None` when the attack dealt no damage and defence was skipped.
    pub defence: Option<Defence>,
}

/// Alternating attack/defend state machine.
#[derive(Debug, Default)]
pub struct TurnEngine {
    phase: Phase,
    half_turns: u32,
}

impl TurnEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn half_turns(&self) -> u32 {
        self.half_turns
    }

    /// Resolves one attack and, if it did damage, the defence against it.
    pub fn half_turn(
        &mut self,
        side: Side,
        attacker: &mut dyn Combatant,
        defender: &mut dyn Combatant,
        ctx: &mut TurnContext<'_>,
    ) -> TurnReport {
        self.half_turns += 1;
        self.phase = Phase::Attacking;
        let attack = attacker.attack(ctx);

        let defence = if attack.damage() > 0 {
            self.phase = Phase::Defending;
            Some(defender.defend(attack.damage(), ctx.rng))
        } else {
            tracing::debug!(attacker = attacker.name(), "attack dealt no damage, defence skipped");
            None
        };

        self.phase = if attacker.is_alive() && defender.is_alive() {
            Phase::Idle
        } else {
            Phase::Finished
        };

        tracing::debug!(
            turn = self.half_turns,
            attacker = attacker.name(),
            damage = attack.damage(),
            taken = defence.as_ref().map_or(0, |d| d.damage_taken),
            "half-turn resolved"
        );

        TurnReport {
            attacker: side,
            attack,
            defence,
        }
    }

    /// Alternates half-turns until one combatant is dead and returns the
    /// loser. `on_turn` sees every report as it happens.
    pub fn run(
        &mut self,
        first: &mut dyn Combatant,
        second: &mut dyn Combatant,
        ctx: &mut TurnContext<'_>,
        mut on_turn: impl FnMut(&TurnReport),
    ) -> Side {
        let mut side = Side::First;
        loop {
            if let Some(loser) = Self::loser(first, second) {
                self.phase = Phase::Finished;
                return loser;
            }

            let report = match side {
                Side::First => self.half_turn(side, first, second, ctx),
                Side::Second => self.half_turn(side, second, first, ctx),
            };
            on_turn(&report);
            side = side.other();
        }
    }

    fn loser(first: &dyn Combatant, second: &dyn Combatant) -> Option<Side> {
        if !first.is_alive() {
            Some(Side::First)
        } else if !second.is_alive() {
            Some(Side::Second)
        } else {
            None
        }
    }
}
