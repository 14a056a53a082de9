//! Static achievement definitions.

use super::types::{AchievementDef, ConditionSnapshot, PassiveEffects};

/// All achievement definitions in evaluation order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // PUBLIC ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_kill",
        name: "First Blood",
        description: "Defeat your first enemy",
        hidden: false,
        condition: |s| s.stats.enemies_killed >= 1,
        effects: PassiveEffects {
            attack: 1,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "kill_10",
        name: "Hunter",
        description: "Defeat 10 enemies",
        hidden: false,
        condition: |s| s.stats.enemies_killed >= 10,
        effects: PassiveEffects {
            attack: 3,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "kill_100",
        name: "Slayer",
        description: "Defeat 100 enemies",
        hidden: false,
        condition: |s| s.stats.enemies_killed >= 100,
        effects: PassiveEffects {
            attack: 10,
            max_hp: 20,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "level_10",
        name: "Seasoned",
        description: "Reach level 10",
        hidden: false,
        condition: |s| s.level >= 10,
        effects: PassiveEffects {
            max_hp: 30,
            max_mp: 15,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "skill_rank_5",
        name: "Adept",
        description: "Raise any skill to rank 5",
        hidden: false,
        condition: |s| s.any_skill_rank_at_least(5),
        effects: PassiveEffects {
            max_mp: 20,
            ..PassiveEffects::NONE
        },
    },
    // ═══════════════════════════════════════════════════════════════
    // HIDDEN ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "hidden_no_death",
        name: "Untouchable",
        description: "Defeat 100 enemies without taking damage",
        hidden: true,
        condition: |s| s.stats.enemies_killed >= 100 && s.stats.total_damage_taken == 0,
        effects: PassiveEffects {
            defense: 10,
            max_hp: 50,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "hidden_perfect_dodge",
        name: "Perfect Dodge",
        description: "Defeat 50 enemies without taking damage",
        hidden: true,
        condition: |s| s.stats.total_damage_taken == 0 && s.stats.enemies_killed >= 50,
        effects: PassiveEffects {
            speed: 2.0,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "hidden_skill_spam",
        name: "Spellslinger",
        description: "Use skills 1,000 times",
        hidden: true,
        condition: |s| s.stats.total_skill_uses >= 1000,
        effects: PassiveEffects {
            max_mp: 30,
            ..PassiveEffects::NONE
        },
    },
    AchievementDef {
        id: "hidden_level_50",
        name: "Ascended",
        description: "Reach level 50",
        hidden: true,
        condition: |s| s.level >= 50,
        effects: PassiveEffects {
            attack: 20,
            defense: 15,
            max_hp: 100,
            max_mp: 50,
            speed: 0.0,
        },
    },
    AchievementDef {
        id: "hidden_all_skills_max",
        name: "Grandmaster",
        description: "Raise every skill to its final rank",
        hidden: true,
        condition: all_skills_maxed,
        effects: PassiveEffects {
            attack: 15,
            max_mp: 50,
            ..PassiveEffects::NONE
        },
    },
];

fn all_skills_maxed(snapshot: &ConditionSnapshot) -> bool {
    snapshot.all_skill_ranks_at_least(crate::core::progression::max_skill_rank())
}

pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_stats::RunStats;
    use std::collections::HashSet;

    #[test]
    fn test_achievement_ids_unique() {
        let ids: HashSet<_> = ALL_ACHIEVEMENTS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn test_hidden_achievements_follow_public() {
        let first_hidden = ALL_ACHIEVEMENTS.iter().position(|d| d.hidden).unwrap();
        assert!(ALL_ACHIEVEMENTS[first_hidden..].iter().all(|d| d.hidden));
        assert_eq!(ALL_ACHIEVEMENTS.len() - first_hidden, 5);
    }

    #[test]
    fn test_every_achievement_grants_something() {
        for def in ALL_ACHIEVEMENTS {
            assert!(!def.effects.is_empty(), "{} grants nothing", def.id);
        }
    }

    #[test]
    fn test_no_damage_conditions() {
        let mut snapshot = ConditionSnapshot {
            stats: RunStats {
                enemies_killed: 50,
                ..Default::default()
            },
            ..Default::default()
        };
        let dodge = get_achievement_def("hidden_perfect_dodge").unwrap();
        let no_death = get_achievement_def("hidden_no_death").unwrap();
        assert!((dodge.condition)(&snapshot));
        assert!(!(no_death.condition)(&snapshot));

        snapshot.stats.total_damage_taken = 1;
        assert!(!(dodge.condition)(&snapshot));
    }

    #[test]
    fn test_all_skills_max_needs_every_skill() {
        let mut snapshot = ConditionSnapshot {
            skill_ranks: vec![6, 6, 6, 6, 5],
            ..Default::default()
        };
        let def = get_achievement_def("hidden_all_skills_max").unwrap();
        assert!(!(def.condition)(&snapshot));
        snapshot.skill_ranks[4] = 6;
        assert!((def.condition)(&snapshot));

        let adept = get_achievement_def("skill_rank_5").unwrap();
        assert!((adept.condition)(&snapshot));
    }

    #[test]
    fn test_lookup() {
        assert!(get_achievement_def("level_10").is_some());
        assert!(get_achievement_def("level_11").is_none());
    }
}
