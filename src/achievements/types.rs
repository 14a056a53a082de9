//! Achievement system types and evaluation.

use super::data::ALL_ACHIEVEMENTS;
use crate::character::Player;
use crate::core::run_stats::RunStats;

/// Text shown for a hidden achievement that is still locked.
pub const HIDDEN_PLACEHOLDER: &str = "???";

/// Permanent additive bonuses granted once on unlock.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PassiveEffects {
    pub attack: i32,
    pub defense: i32,
    pub max_hp: i32,
    pub max_mp: i32,
    pub speed: f64,
}

impl PassiveEffects {
    pub const NONE: PassiveEffects = PassiveEffects {
        attack: 0,
        defense: 0,
        max_hp: 0,
        max_mp: 0,
        speed: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    pub fn combine(&self, other: &PassiveEffects) -> PassiveEffects {
        PassiveEffects {
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            max_hp: self.max_hp + other.max_hp,
            max_mp: self.max_mp + other.max_mp,
            speed: self.speed + other.speed,
        }
    }
}

/// Read-only view of everything an unlock condition may look at.
#[derive(Debug, Clone, Default)]
pub struct ConditionSnapshot {
    pub level: u32,
    pub effective_attack: i32,
    pub effective_defense: i32,
    pub stats: RunStats,
    pub skill_ranks: Vec<u32>,
}

impl ConditionSnapshot {
    pub fn capture(player: &Player, stats: &RunStats, skill_ranks: &[u32]) -> Self {
        Self {
            level: player.level,
            effective_attack: player.effective_attack(),
            effective_defense: player.effective_defense(),
            stats: *stats,
            skill_ranks: skill_ranks.to_vec(),
        }
    }

    pub fn any_skill_rank_at_least(&self, rank: u32) -> bool {
        self.skill_ranks.iter().any(|&r| r >= rank)
    }

    pub fn all_skill_ranks_at_least(&self, rank: u32) -> bool {
        !self.skill_ranks.is_empty() && self.skill_ranks.iter().all(|&r| r >= rank)
    }
}

/// Side-effect-free unlock predicate.
pub type Condition = fn(&ConditionSnapshot) -> bool;

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub hidden: bool,
    pub condition: Condition,
    pub effects: PassiveEffects,
}

#[derive(Debug, Clone)]
pub struct Achievement {
    def: &'static AchievementDef,
    unlocked: bool,
    unlocked_at: Option<i64>,
}

impl Achievement {
    pub fn new(def: &'static AchievementDef) -> Self {
        Self {
            def,
            unlocked: false,
            unlocked_at: None,
        }
    }

    pub fn def(&self) -> &'static AchievementDef {
        self.def
    }

    pub fn id(&self) -> &'static str {
        self.def.id
    }

    pub fn is_hidden(&self) -> bool {
        self.def.hidden
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn unlocked_at(&self) -> Option<i64> {
        self.unlocked_at
    }

    pub fn display_name(&self) -> &'static str {
        if self.def.hidden && !self.unlocked {
            HIDDEN_PLACEHOLDER
        } else {
            self.def.name
        }
    }

    pub fn display_description(&self) -> &'static str {
        if self.def.hidden && !self.unlocked {
            HIDDEN_PLACEHOLDER
        } else {
            self.def.description
        }
    }

    /// Marks the achievement unlocked. Returns false if it already was.
    fn unlock(&mut self, unlocked_at: i64) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlocked_at = Some(unlocked_at);
        true
    }
}

/// Owns every achievement instance, in catalog (evaluation) order.
#[derive(Debug, Clone)]
pub struct AchievementMaster {
    achievements: Vec<Achievement>,
}

impl Default for AchievementMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementMaster {
    pub fn new() -> Self {
        Self::from_defs(ALL_ACHIEVEMENTS)
    }

    pub fn from_defs(defs: &'static [AchievementDef]) -> Self {
        Self {
            achievements: defs.iter().map(Achievement::new).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id() == id)
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.get(id).is_some_and(|a| a.is_unlocked())
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Sum of passive effects of every unlocked achievement.
    pub fn unlocked_effects(&self) -> PassiveEffects {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .fold(PassiveEffects::NONE, |acc, a| acc.combine(&a.def.effects))
    }

    /// Unlocks one achievement and applies its effects with a top-up.
    /// Returns false (and changes nothing) if it is unknown or already unlocked.
    pub fn unlock(&mut self, id: &str, player: &mut Player, now: i64) -> bool {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id() == id) else {
            return false;
        };
        if !achievement.unlock(now) {
            return false;
        }
        player.apply_passive_effects(&achievement.def.effects, true);
        true
    }

    /// Polls every locked achievement, unlocking those whose condition holds.
    ///
    /// Any unlock triggers another full pass, since the snapshot is
    /// recaptured and a bonus may satisfy another condition. Returns the
    /// newly unlocked definitions in unlock order.
    pub fn evaluate(
        &mut self,
        player: &mut Player,
        stats: &RunStats,
        skill_ranks: &[u32],
        now: i64,
    ) -> Vec<&'static AchievementDef> {
        let mut newly_unlocked = Vec::new();

        loop {
            let snapshot = ConditionSnapshot::capture(player, stats, skill_ranks);
            let mut unlocked_this_pass = false;

            for achievement in &mut self.achievements {
                if achievement.unlocked || !(achievement.def.condition)(&snapshot) {
                    continue;
                }
                if achievement.unlock(now) {
                    player.apply_passive_effects(&achievement.def.effects, true);
                    newly_unlocked.push(achievement.def);
                    unlocked_this_pass = true;
                }
            }

            if !unlocked_this_pass {
                break;
            }
        }

        newly_unlocked
    }

    /// Restores persisted unlock state for one achievement.
    ///
    /// Effects are re-applied without a top-up. Unknown ids and entries that
    /// are already unlocked are ignored, so effects land at most once.
    pub fn restore(
        &mut self,
        id: &str,
        unlocked: bool,
        unlocked_at: Option<i64>,
        player: &mut Player,
    ) -> bool {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id() == id) else {
            return false;
        };
        if !unlocked || achievement.unlocked {
            return false;
        }
        achievement.unlocked = true;
        achievement.unlocked_at = unlocked_at;
        player.apply_passive_effects(&achievement.def.effects, false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_kills(kills: u64) -> ConditionSnapshot {
        ConditionSnapshot {
            level: 1,
            stats: RunStats {
                enemies_killed: kills,
                ..Default::default()
            },
            skill_ranks: vec![1; 5],
            ..Default::default()
        }
    }

    #[test]
    fn test_hidden_placeholder_until_unlocked() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();
        let hidden = master.get("hidden_skill_spam").unwrap();
        assert!(hidden.is_hidden());
        assert_eq!(hidden.display_name(), HIDDEN_PLACEHOLDER);
        assert_eq!(hidden.display_description(), HIDDEN_PLACEHOLDER);

        assert!(master.unlock("hidden_skill_spam", &mut player, 0));
        let hidden = master.get("hidden_skill_spam").unwrap();
        assert_ne!(hidden.display_name(), HIDDEN_PLACEHOLDER);
    }

    #[test]
    fn test_public_achievement_always_named() {
        let master = AchievementMaster::new();
        let first = master.get("first_kill").unwrap();
        assert_ne!(first.display_name(), HIDDEN_PLACEHOLDER);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();

        assert!(master.unlock("first_kill", &mut player, 1));
        let after_first = player.status_modifiers;
        assert!(!master.unlock("first_kill", &mut player, 2));

        assert_eq!(player.status_modifiers, after_first);
        assert_eq!(master.get("first_kill").unwrap().unlocked_at(), Some(1));
    }

    #[test]
    fn test_evaluate_unlocks_once() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();
        let stats = RunStats {
            enemies_killed: 10,
            total_damage_taken: 5,
            ..Default::default()
        };

        let unlocked = master.evaluate(&mut player, &stats, &[1; 5], 0);
        let ids: Vec<_> = unlocked.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["first_kill", "kill_10"]);
        assert_eq!(player.status_modifiers.attack, 4);

        let again = master.evaluate(&mut player, &stats, &[1; 5], 0);
        assert!(again.is_empty());
        assert_eq!(player.status_modifiers.attack, 4);
    }

    #[test]
    fn test_conditions_are_pure_functions_of_snapshot() {
        let def = ALL_ACHIEVEMENTS.iter().find(|d| d.id == "kill_10").unwrap();
        assert!(!(def.condition)(&snapshot_with_kills(9)));
        assert!((def.condition)(&snapshot_with_kills(10)));
    }

    #[test]
    fn test_restore_skips_already_unlocked() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();
        assert!(master.restore("kill_100", true, Some(5), &mut player));
        assert!(!master.restore("kill_100", true, Some(5), &mut player));
        assert_eq!(player.status_modifiers.attack, 10);
        assert_eq!(player.status_modifiers.max_hp, 20);
        // No top-up on restore
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_restore_ignores_unknown_and_locked() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();
        assert!(!master.restore("retired_achievement", true, None, &mut player));
        assert!(!master.restore("first_kill", false, None, &mut player));
        assert_eq!(master.unlocked_count(), 0);
    }

    #[test]
    fn test_unlocked_effects_sum() {
        let mut master = AchievementMaster::new();
        let mut player = Player::new();
        master.unlock("first_kill", &mut player, 0);
        master.unlock("level_10", &mut player, 0);
        let total = master.unlocked_effects();
        assert_eq!(total.attack, 1);
        assert_eq!(total.max_hp, 30);
        assert_eq!(total.max_mp, 15);
        assert_eq!(player.status_modifiers.max_hp, total.max_hp);
    }
}
