// src/outcome.rs
//! Rewards and terminal signalling once a battle has a loser.

use combat::{Combatant, Enemy, Species};
use hero::Player;
use serde::{Deserialize, Serialize};

/// Fraction of current health restored after a victory, rounded up.
pub const VICTORY_HEAL_RATE: f64 = 0.5;

/// Who lost the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loser {
    Player,
    Enemy,
}

/// What settling a battle did to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub loser: Loser,
    pub enemy: Species,
    /// The player died; no further battles.
    pub end_game: bool,
    /// The boss was defeated.
    pub game_completed: bool,
    pub gold_awarded: i32,
    pub health_restored: u32,
    pub final_gold: i32,
}

/// Applies the result of a finished battle to the player.
///
/// A defeated enemy hands over its gold and the player recovers
/// `ceil(health * 0.5)`, capped at max health. A player loss only reports the
/// gold left.
pub fn settle(player: &mut Player, enemy: &Enemy, loser: Loser) -> BattleOutcome {
    match loser {
        Loser::Player => {
            tracing::info!(player = player.name(), enemy = %enemy.species(), "player defeated");
            BattleOutcome {
                loser,
                enemy: enemy.species(),
                end_game: true,
                game_completed: false,
                gold_awarded: 0,
                health_restored: 0,
                final_gold: player.gold(),
            }
        }
        Loser::Enemy => {
            let reward = enemy.gold();
            player.modify_gold(reward);

            let heal = (player.health() as f64 * VICTORY_HEAL_RATE).ceil() as i32;
            let change = player.modify_health(heal);
            let game_completed = enemy.species().is_boss();

            tracing::info!(
                player = player.name(),
                enemy = %enemy.species(),
                reward,
                healed = change.delta(),
                game_completed,
                "enemy defeated"
            );

            BattleOutcome {
                loser,
                enemy: enemy.species(),
                end_game: false,
                game_completed,
                gold_awarded: reward,
                health_restored: change.after - change.before,
                final_gold: player.gold(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn wounded_player(health: u32) -> Player {
        let mut player = Player::new("Rohan");
        player.modify_health(health as i32 - 30);
        player
    }

    #[test]
    fn test_victory_over_ogre() {
        let mut player = wounded_player(20);
        let mut ogre = Enemy::new(Species::Ogre);
        ogre.modify_health(-40);

        let outcome = settle(&mut player, &ogre, Loser::Enemy);
        assert_eq!(
            outcome,
            BattleOutcome {
                loser: Loser::Enemy,
                enemy: Species::Ogre,
                end_game: false,
                game_completed: false,
                gold_awarded: 40,
                health_restored: 10,
                final_gold: 140,
            }
        );
        assert_eq!(player.health(), 30);
    }

    #[test]
    fn test_heal_rounds_up() {
        let mut player = wounded_player(7);
        let slime = Enemy::with_health(Species::Slime, 0);
        let outcome = settle(&mut player, &slime, Loser::Enemy);
        assert_eq!(outcome.health_restored, 4);
        assert_eq!(player.health(), 11);
    }

    #[test]
    fn test_dragon_completes_game() {
        let mut player = wounded_player(30);
        let dragon = Enemy::with_health(Species::Dragon, 0);
        let outcome = settle(&mut player, &dragon, Loser::Enemy);
        assert!(outcome.game_completed);
        assert!(!outcome.end_game);
        assert_eq!(outcome.final_gold, 200);
        assert_eq!(outcome.health_restored, 0);
    }

    #[test]
    fn test_player_loss_ends_game_without_award() {
        let mut player = wounded_player(1);
        player.modify_health(-5);
        let goblin = Enemy::new(Species::Goblin);

        let outcome = settle(&mut player, &goblin, Loser::Player);
        assert!(outcome.end_game);
        assert_eq!(outcome.gold_awarded, 0);
        assert_eq!(outcome.final_gold, 100);
        assert_eq!(player.gold(), 100);
    }

    proptest! {
        #[test]
        fn victory_heal_stays_capped(health in 1u32..=30) {
            let mut player = wounded_player(health);
            let slime = Enemy::with_health(Species::Slime, 0);
            let outcome = settle(&mut player, &slime, Loser::Enemy);
            let expected = (health + health.div_ceil(2)).min(30);
            prop_assert_eq!(player.health(), expected);
            prop_assert_eq!(outcome.health_restored, expected - health);
        }
    }
}
