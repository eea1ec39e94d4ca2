#![allow(dead_code)]

//! Shared fixtures for the battle and session tests.

use combat::{Attack, AttackInput, AttackOption, CharacterSnapshot, Combatant, Defence};
use combat_game::{BattleOutcome, BattleView};
use hero::Player;
use items::{Armour, Weapon};
use mockall::mock;

mock! {
    pub Input {}
    impl AttackInput for Input {
        fn choose_attack(&mut self, chooser: &CharacterSnapshot, options: &[AttackOption]) -> usize;
    }
}

mock! {
    pub View {}
    impl BattleView for View {
        fn on_attack_resolved(&mut self, attack: &Attack);
        fn on_defence_resolved(&mut self, defence: &Defence);
        fn on_death(&mut self, character: &CharacterSnapshot);
        fn on_battle_end(&mut self, outcome: &BattleOutcome);
    }
}

/// Everything a view was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Attack(Attack),
    Defence(Defence),
    Death(String),
    End(BattleOutcome),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub seen: Vec<Seen>,
}

impl RecordingView {
    pub fn deaths(&self) -> usize {
        self.seen
            .iter()
            .filter(|s| matches!(s, Seen::Death(_)))
            .count()
    }

    pub fn attacks(&self) -> Vec<&Attack> {
        self.seen
            .iter()
            .filter_map(|s| match s {
                Seen::Attack(a) => Some(a),
                _ => None,
            })
            .collect()
    }
}

impl BattleView for RecordingView {
    fn on_attack_resolved(&mut self, attack: &Attack) {
        self.seen.push(Seen::Attack(attack.clone()));
    }

    fn on_defence_resolved(&mut self, defence: &Defence) {
        self.seen.push(Seen::Defence(defence.clone()));
    }

    fn on_death(&mut self, character: &CharacterSnapshot) {
        self.seen.push(Seen::Death(character.name.clone()));
    }

    fn on_battle_end(&mut self, outcome: &BattleOutcome) {
        self.seen.push(Seen::End(outcome.clone()));
    }
}

/// Player holding a fixed-damage weapon and no armour.
pub fn player_with_damage(damage: i32) -> Player {
    let mut player = Player::new("Rohan");
    player.equip_weapon(Weapon::new("Test Blade", 0, damage, damage, "Sword", "Slashing"));
    player.set_armour(Armour::placeholder());
    player
}

pub fn wound(player: &mut Player, health: u32) {
    let delta = health as i32 - player.health() as i32;
    player.modify_health(delta);
}
