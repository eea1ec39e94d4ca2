// src/view.rs
//! Display collaborator for battle notifications.

use combat::{Attack, CharacterSnapshot, Defence};

use crate::outcome::BattleOutcome;

/// Receives battle notifications as they happen. Fire-and-forget.
pub trait BattleView {
    fn on_attack_resolved(&mut self, attack: &Attack);

    fn on_defence_resolved(&mut self, defence: &Defence);

    fn on_death(&mut self, character: &CharacterSnapshot);

    fn on_battle_end(&mut self, outcome: &BattleOutcome);
}

/// Writes every notification to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogView;

impl BattleView for LogView {
    fn on_attack_resolved(&mut self, attack: &Attack) {
        for line in attack.lines() {
            tracing::info!(target: "battle", "{}", line);
        }
    }

    fn on_defence_resolved(&mut self, defence: &Defence) {
        for line in defence.lines() {
            tracing::info!(target: "battle", "{}", line);
        }
    }

    fn on_death(&mut self, character: &CharacterSnapshot) {
        tracing::info!(target: "battle", "{} died.", character.name);
    }

    fn on_battle_end(&mut self, outcome: &BattleOutcome) {
        if outcome.end_game {
            tracing::info!(target: "battle", gold = outcome.final_gold, "Game over.");
        } else {
            tracing::info!(
                target: "battle",
                gold = outcome.gold_awarded,
                healed = outcome.health_restored,
                "Victory!"
            );
            if outcome.game_completed {
                tracing::info!(target: "battle", "The dragon has fallen. You win!");
            }
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl BattleView for NullView {
    fn on_attack_resolved(&mut self, _attack: &Attack) {}

    fn on_defence_resolved(&mut self, _defence: &Defence) {}

    fn on_death(&mut self, _character: &CharacterSnapshot) {}

    fn on_battle_end(&mut self, _outcome: &BattleOutcome) {}
}
