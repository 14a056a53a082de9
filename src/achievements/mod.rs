//! Achievement system module.
//!
//! Achievements are polled against a snapshot of run progress. Each unlock
//! grants a permanent passive bonus to the player exactly once.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{
    Achievement, AchievementDef, AchievementMaster, ConditionSnapshot, PassiveEffects,
    HIDDEN_PLACEHOLDER,
};
