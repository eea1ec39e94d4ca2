// src/autopilot.rs
use combat::{AttackAction, AttackInput, AttackOption, CharacterSnapshot};

use crate::session::GameSession;

/// Healing potions the autopilot tries to carry into each battle.
pub const POTION_RESERVE: usize = 2;

/// Computer-controlled player input.
///
/// Drinks a healing potion once health falls below a third of the maximum,
/// otherwise swings the weapon.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPilot;

impl AutoPilot {
    pub fn new() -> Self {
        Self
    }

    /// Tops up on the cheapest healing potion between battles, keeping at
    /// most [`POTION_RESERVE`] in the bag. Returns how many were bought.
    pub fn restock(&self, session: &mut GameSession) -> usize {
        let cheapest = session
            .shop()
            .items()
            .potions()
            .into_iter()
            .filter(|(_, p)| p.is_healing())
            .min_by_key(|(_, p)| p.cost)
            .map(|(index, _)| index);
        let Some(index) = cheapest else {
            return 0;
        };

        let mut bought = 0;
        while Self::healing_held(session) < POTION_RESERVE {
            match session.buy(index) {
                Ok(_) => bought += 1,
                Err(e) => {
                    tracing::debug!(error = %e, "autopilot stops shopping");
                    break;
                }
            }
        }
        bought
    }

    fn healing_held(session: &GameSession) -> usize {
        session
            .player()
            .inventory()
            .potions()
            .iter()
            .filter(|(_, p)| p.is_healing())
            .count()
    }
}

impl AttackInput for AutoPilot {
    fn choose_attack(&mut self, chooser: &CharacterSnapshot, options: &[AttackOption]) -> usize {
        if chooser.health * 3 < chooser.max_health {
            let potion = options.iter().position(|o| {
                matches!(o.action, AttackAction::Potion { healing: true, .. })
            });
            if let Some(index) = potion {
                tracing::debug!(health = chooser.health, "autopilot drinks a potion");
                return index;
            }
        }
        options
            .iter()
            .position(|o| o.action == AttackAction::Weapon)
            .unwrap_or(0)
    }
}
