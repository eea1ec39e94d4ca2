// src/combat/src/combatant.rs

use rng::RandomSource;
use std::fmt;
use std::sync::mpsc::Sender;

use crate::attack::{Attack, Defence};
use crate::engine::TurnContext;

/// Health bookkeeping shared by every combatant.
///
/// Health is always clamped to `0..=max_health`. Reaching zero marks the
/// character dead, and a dead character ignores any further change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    health: u32,
    max_health: u32,
    dead: bool,
}

/// What a single health modification did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChange {
    pub before: u32,
    pub after: u32,
    /// True only for the modification that took health to zero.
    pub died: bool,
}

impl HealthChange {
    pub fn delta(&self) -> i64 {
        self.after as i64 - self.before as i64
    }
}

impl Vitals {
    /// Starts at full health.
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            dead: max_health == 0,
        }
    }

    /// Starts at a given health, clamped to the cap.
    pub fn with_health(health: u32, max_health: u32) -> Self {
        let health = health.min(max_health);
        Self {
            health,
            max_health,
            dead: health == 0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn apply(&mut self, delta: i32) -> HealthChange {
        let before = self.health;
        if self.dead {
            return HealthChange {
                before,
                after: before,
                died: false,
            };
        }

        let next = (before as i64 + delta as i64).clamp(0, self.max_health as i64) as u32;
        self.health = next;
        let died = next == 0;
        if died {
            self.dead = true;
        }

        HealthChange {
            before,
            after: next,
            died,
        }
    }
}

/// Read-only view of a character handed to observers and views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSnapshot {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub gold: i32,
}

/// Events a character raises to its observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterEvent {
    /// Fired before an attack's result is computed.
    AttackRequested(CharacterSnapshot),
    /// Fired once, when health first reaches zero.
    Died(CharacterSnapshot),
}

/// Listener registered on a single character.
pub trait CharacterObserver {
    fn on_attack(&mut self, _character: &CharacterSnapshot) {}

    fn on_death(&mut self, _character: &CharacterSnapshot) {}
}

/// Handle returned by [`Observers::add`], used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Per-character observer list.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn CharacterObserver>)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: Box<dyn CharacterObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn CharacterObserver>> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify_attack(&mut self, character: &CharacterSnapshot) {
        for (_, observer) in &mut self.entries {
            observer.on_attack(character);
        }
    }

    pub fn notify_death(&mut self, character: &CharacterSnapshot) {
        for (_, observer) in &mut self.entries {
            observer.on_death(character);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// Forwards character events into a channel owned by the battle.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<CharacterEvent>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<CharacterEvent>) -> Self {
        Self { sender }
    }
}

impl CharacterObserver for ChannelObserver {
    fn on_attack(&mut self, character: &CharacterSnapshot) {
        // receiver gone means the battle is over
        let _ = self
            .sender
            .send(CharacterEvent::AttackRequested(character.clone()));
    }

    fn on_death(&mut self, character: &CharacterSnapshot) {
        let _ = self.sender.send(CharacterEvent::Died(character.clone()));
    }
}

/// A living participant in a battle.
pub trait Combatant {
    fn name(&self) -> &str;

    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn observers_mut(&mut self) -> &mut Observers;

    fn min_attack(&self) -> i32;

    fn max_attack(&self) -> i32;

    fn min_defence(&self) -> i32;

    fn max_defence(&self) -> i32;

    /// Gold held (player) or dropped on defeat (enemy).
    fn gold(&self) -> i32;

    /// Produces this character's attack for the current half-turn.
    fn attack(&mut self, ctx: &mut TurnContext<'_>) -> Attack;

    fn health(&self) -> u32 {
        self.vitals().health()
    }

    fn max_health(&self) -> u32 {
        self.vitals().max_health()
    }

    fn is_alive(&self) -> bool {
        !self.vitals().is_dead()
    }

    fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name().to_string(),
            health: self.health(),
            max_health: self.max_health(),
            gold: self.gold(),
        }
    }

    fn add_observer(&mut self, observer: Box<dyn CharacterObserver>) -> ObserverId {
        self.observers_mut().add(observer)
    }

    fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn CharacterObserver>> {
        self.observers_mut().remove(id)
    }

    fn notify_attack(&mut self) {
        let snapshot = self.snapshot();
        self.observers_mut().notify_attack(&snapshot);
    }

    /// Applies a clamped health change, firing the death event on the
    /// change that reaches zero.
    fn modify_health(&mut self, delta: i32) -> HealthChange {
        let change = self.vitals_mut().apply(delta);
        if change.died {
            tracing::debug!(character = self.name(), "character died");
            let snapshot = self.snapshot();
            self.observers_mut().notify_death(&snapshot);
        }
        change
    }

    /// Rolls defence over the current range and takes whatever gets through.
    fn defend(&mut self, damage: u32, rng: &mut dyn RandomSource) -> Defence {
        let applied = rng.range_int(self.min_defence(), self.max_defence()).max(0) as u32;
        let mut defence = Defence::new(damage, applied);
        defence.log(format!("{} deflected {}DP.", self.name(), applied));
        self.modify_health(-(defence.damage_taken.min(i32::MAX as u32) as i32));
        defence.log(format!("{} lost {}HP.", self.name(), defence.damage_taken));
        defence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rng::ScriptedRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    struct Dummy {
        vitals: Vitals,
        observers: Observers,
        defence: (i32, i32),
    }

    impl Dummy {
        fn new(max_health: u32) -> Self {
            Self {
                vitals: Vitals::new(max_health),
                observers: Observers::new(),
                defence: (2, 6),
            }
        }
    }

    impl Combatant for Dummy {
        fn name(&self) -> &str {
            "Dummy"
        }
        fn vitals(&self) -> &Vitals {
            &self.vitals
        }
        fn vitals_mut(&mut self) -> &mut Vitals {
            &mut self.vitals
        }
        fn observers_mut(&mut self) -> &mut Observers {
            &mut self.observers
        }
        fn min_attack(&self) -> i32 {
            1
        }
        fn max_attack(&self) -> i32 {
            1
        }
        fn min_defence(&self) -> i32 {
            self.defence.0
        }
        fn max_defence(&self) -> i32 {
            self.defence.1
        }
        fn gold(&self) -> i32 {
            0
        }
        fn attack(&mut self, _ctx: &mut TurnContext<'_>) -> Attack {
            Attack::new(1, "Dummy pokes.")
        }
    }

    #[derive(Default)]
    struct Counter {
        attacks: u32,
        deaths: u32,
    }

    struct Shared(Rc<RefCell<Counter>>);

    impl CharacterObserver for Shared {
        fn on_attack(&mut self, _character: &CharacterSnapshot) {
            self.0.borrow_mut().attacks += 1;
        }
        fn on_death(&mut self, _character: &CharacterSnapshot) {
            self.0.borrow_mut().deaths += 1;
        }
    }

    #[test]
    fn test_health_is_clamped() {
        let mut vitals = Vitals::with_health(20, 30);
        assert_eq!(vitals.apply(25).after, 30);
        assert_eq!(vitals.apply(-100).after, 0);
        assert!(vitals.is_dead());
    }

    #[test]
    fn test_dead_character_is_not_revived() {
        let mut dummy = Dummy::new(10);
        dummy.modify_health(-10);
        let change = dummy.modify_health(50);
        assert_eq!(change.after, 0);
        assert!(!dummy.is_alive());
    }

    #[test]
    fn test_death_fires_exactly_once() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut dummy = Dummy::new(10);
        dummy.add_observer(Box::new(Shared(counter.clone())));

        dummy.modify_health(-4);
        dummy.modify_health(-40);
        dummy.modify_health(-1);
        dummy.modify_health(5);

        assert_eq!(counter.borrow().deaths, 1);
    }

    #[test]
    fn test_removed_observer_is_silent() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut dummy = Dummy::new(10);
        let id = dummy.add_observer(Box::new(Shared(counter.clone())));
        dummy.notify_attack();
        assert!(dummy.remove_observer(id).is_some());
        assert!(dummy.remove_observer(id).is_none());
        dummy.notify_attack();
        dummy.modify_health(-10);

        let counter = counter.borrow();
        assert_eq!(counter.attacks, 1);
        assert_eq!(counter.deaths, 0);
    }

    #[test]
    fn test_channel_observer_forwards_events() {
        let (tx, rx) = mpsc::channel();
        let mut dummy = Dummy::new(3);
        dummy.add_observer(Box::new(ChannelObserver::new(tx)));
        dummy.notify_attack();
        dummy.modify_health(-3);

        let events: Vec<CharacterEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CharacterEvent::AttackRequested(_)));
        match &events[1] {
            CharacterEvent::Died(who) => assert_eq!(who.health, 0),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_defend_applies_reduced_damage() {
        let mut dummy = Dummy::new(20);
        let mut rng = ScriptedRng::new().with_ints([4]);
        let defence = dummy.defend(10, &mut rng);
        assert_eq!(defence.defence_applied, 4);
        assert_eq!(defence.damage_taken, 6);
        assert_eq!(dummy.health(), 14);
        assert_eq!(
            defence.lines(),
            ["Dummy deflected 4DP.".to_string(), "Dummy lost 6HP.".to_string()]
        );
    }

    #[test]
    fn test_defend_fully_absorbed() {
        let mut dummy = Dummy::new(20);
        let mut rng = ScriptedRng::new().with_ints([6]);
        let defence = dummy.defend(3, &mut rng);
        assert_eq!(defence.damage_taken, 0);
        assert_eq!(dummy.health(), 20);
    }

    proptest! {
        #[test]
        fn health_stays_in_bounds(max in 1u32..200, deltas in proptest::collection::vec(-300i32..300, 0..40)) {
            let mut vitals = Vitals::new(max);
            for delta in deltas {
                let change = vitals.apply(delta);
                prop_assert!(change.after <= max);
                prop_assert!(vitals.health() <= vitals.max_health());
            }
        }

        #[test]
        fn defend_matches_formula(damage in 0u32..100, low in 0i32..20, span in 0i32..20, seed in any::<u64>()) {
            let mut dummy = Dummy::new(1000);
            dummy.defence = (low, low + span);
            let mut rng = rng::GameRng::new(seed);
            let defence = dummy.defend(damage, &mut rng);
            prop_assert_eq!(defence.damage_taken, damage.saturating_sub(defence.defence_applied));
            prop_assert!(defence.defence_applied as i32 >= low);
            prop_assert!(defence.defence_applied as i32 <= low + span);
        }
    }
}
