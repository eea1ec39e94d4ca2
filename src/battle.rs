// src/battle.rs
//! A single player-versus-enemy fight.

use std::sync::mpsc::{self, Receiver};

use combat::{
    AttackInput, ChannelObserver, CharacterEvent, Combatant, Enemy, Side, TurnContext, TurnEngine,
};
use hero::Player;
use rng::RandomSource;

use crate::outcome::{BattleOutcome, Loser, settle};
use crate::view::BattleView;

/// Wires observers for one battle, runs it to the death and settles the result.
pub struct Battle<'a> {
    player: &'a mut Player,
    enemy: Enemy,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: Enemy) -> Self {
        Self { player, enemy }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Runs the fight with the player acting first.
    pub fn run(
        mut self,
        rng: &mut dyn RandomSource,
        input: &mut dyn AttackInput,
        view: &mut dyn BattleView,
    ) -> BattleOutcome {
        let (tx, rx) = mpsc::channel();
        let player_obs = self
            .player
            .add_observer(Box::new(ChannelObserver::new(tx.clone())));
        let enemy_obs = self.enemy.add_observer(Box::new(ChannelObserver::new(tx)));

        tracing::info!(
            player = self.player.name(),
            enemy = %self.enemy.species(),
            "battle started"
        );

        let side = {
            let mut ctx = TurnContext::new(rng, input);
            let mut engine = TurnEngine::new();
            engine.run(&mut *self.player, &mut self.enemy, &mut ctx, |report| {
                view.on_attack_resolved(&report.attack);
                if let Some(defence) = &report.defence {
                    view.on_defence_resolved(defence);
                }
            })
        };

        Self::forward_deaths(&rx, view);

        self.player.remove_observer(player_obs);
        self.enemy.remove_observer(enemy_obs);

        let loser = match side {
            Side::First => Loser::Player,
            Side::Second => Loser::Enemy,
        };
        let outcome = settle(self.player, &self.enemy, loser);
        view.on_battle_end(&outcome);
        outcome
    }

    fn forward_deaths(rx: &Receiver<CharacterEvent>, view: &mut dyn BattleView) {
        let mut deaths = 0;
        for event in rx.try_iter() {
            match event {
                CharacterEvent::Died(who) => {
                    deaths += 1;
                    view.on_death(&who);
                }
                CharacterEvent::AttackRequested(who) => {
                    tracing::trace!(character = %who.name, health = who.health, "attack requested");
                }
            }
        }
        if deaths != 1 {
            tracing::warn!(deaths, "unexpected number of death events");
        }
    }
}
