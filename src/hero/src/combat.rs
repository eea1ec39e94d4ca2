// src/hero/src/combat.rs
use combat::{
    Attack, AttackAction, AttackOption, Combatant, Observers, TurnContext, Vitals,
};
use items::{Item, Potion, PotionKind};
use rng::RandomSource;

use super::core::Player;

/// 武器选项的标签前缀
pub const WEAPON_PREFIX: &str = "Attack with ";
/// 药水选项的标签前缀
pub const POTION_PREFIX: &str = "Use ";

impl Player {
    /// 本回合可选的行动：武器攻击在前，随后是背包中的每瓶药水
    pub fn attack_options(&self) -> Vec<AttackOption> {
        let mut options = vec![AttackOption {
            label: format!("{}{}", WEAPON_PREFIX, self.weapon().name()),
            action: AttackAction::Weapon,
        }];
        options.extend(
            self.inventory
                .potions()
                .into_iter()
                .map(|(slot, potion)| AttackOption {
                    label: format!("{}{}", POTION_PREFIX, potion.name),
                    action: AttackAction::Potion {
                        slot,
                        healing: potion.is_healing(),
                    },
                }),
        );
        options
    }

    /// 执行选定的行动
    pub fn perform(&mut self, action: AttackAction, rng: &mut dyn RandomSource) -> Attack {
        match action {
            AttackAction::Weapon => self.swing(rng),
            AttackAction::Potion { slot, .. } => self.use_potion(slot, rng),
        }
    }

    fn swing(&mut self, rng: &mut dyn RandomSource) -> Attack {
        let damage = self.weapon().roll_damage(rng);
        let line = format!(
            "{} attacked with {}, dealing {}DP.",
            self.name,
            self.weapon(),
            damage.max(0)
        );
        Attack::new(damage, line)
    }

    /// 药水用后即从背包移除
    fn use_potion(&mut self, slot: usize, rng: &mut dyn RandomSource) -> Attack {
        if !matches!(self.inventory.get(slot), Some(Item::Potion(_))) {
            tracing::warn!(player = %self.name, slot, "no potion in slot, swinging instead");
            return self.swing(rng);
        }
        let potion: Potion = match self.inventory.remove(slot) {
            Ok(Item::Potion(potion)) => potion,
            _ => return self.swing(rng),
        };

        let effect = potion.roll_effect(rng);
        match potion.kind {
            PotionKind::Healing => {
                self.modify_health(effect);
                Attack::new(
                    0,
                    format!("{} used {}, gaining {}HP.", self.name, potion.name, effect),
                )
            }
            PotionKind::Damage => Attack::new(
                effect,
                format!(
                    "{} attacked with {}, dealing {}DP.",
                    self.name,
                    potion.name,
                    effect.max(0)
                ),
            ),
        }
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
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
        self.equipment.attack_range().0
    }

    fn max_attack(&self) -> i32 {
        self.equipment.attack_range().1
    }

    fn min_defence(&self) -> i32 {
        self.equipment.defence_range().0
    }

    fn max_defence(&self) -> i32 {
        self.equipment.defence_range().1
    }

    fn gold(&self) -> i32 {
        self.gold
    }

    /// 通知观察者后阻塞等待玩家选择
    fn attack(&mut self, ctx: &mut TurnContext<'_>) -> Attack {
        self.notify_attack();

        let options = self.attack_options();
        let choice = ctx.input.choose_attack(&self.snapshot(), &options);
        let action = match options.get(choice) {
            Some(option) => option.action,
            None => {
                tracing::warn!(
                    player = %self.name,
                    choice,
                    options = options.len(),
                    "attack choice out of range, using weapon"
                );
                AttackAction::Weapon
            }
        };
        tracing::debug!(player = %self.name, ?action, "attack chosen");
        self.perform(action, ctx.rng)
    }
}
