//! Pure progression formulas shared by the game and its tests.
//!
//! Everything here is a function of its arguments only: skill cost and
//! damage depend on nothing but the usage count, and the level-up loop
//! works on a plain [`LevelState`] so it can be exercised without a player.

use super::constants::*;

/// Current MP cost of a skill after mastery reduction.
///
/// Cost decays by 0.1% per use down to half of the base cost, and never
/// drops below 1.
pub fn skill_current_cost(base_cost: u32, usage_count: u64) -> u32 {
    let reduction =
        (usage_count as f64 * SKILL_COST_REDUCTION_PER_USE).min(SKILL_MAX_COST_REDUCTION);
    let cost = (base_cost as f64 * (1.0 - reduction)).floor() as u32;
    cost.max(1)
}

/// Current damage (or heal amount) of a skill. Grows linearly, uncapped.
pub fn skill_current_damage(base_damage: u32, usage_count: u64) -> u32 {
    let multiplier = 1.0 + usage_count as f64 * SKILL_DAMAGE_GROWTH_PER_USE;
    (base_damage as f64 * multiplier).floor() as u32
}

/// Rank (1-based) for a usage count against the fixed threshold ladder.
pub fn skill_rank(usage_count: u64) -> u32 {
    SKILL_RANK_THRESHOLDS
        .iter()
        .rposition(|&threshold| usage_count >= threshold)
        .map(|i| i as u32 + 1)
        .unwrap_or(1)
}

/// Highest rank reachable on the ladder.
pub fn max_skill_rank() -> u32 {
    SKILL_RANK_THRESHOLDS.len() as u32
}

/// Display name for a skill at a given rank.
pub fn rank_name(base_name: &str, rank: u32) -> String {
    match rank {
        0 | 1 => base_name.to_string(),
        2 => format!("{base_name} II"),
        3 => format!("{base_name} III"),
        4 => format!("{base_name} IV"),
        5 => format!("{base_name} V"),
        _ => format!("{base_name} \u{221e}"),
    }
}

/// The part of the player that leveling touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
}

/// Adds experience and runs the level-up loop.
/// Returns the number of levels gained (may be more than one).
pub fn apply_exp(state: &mut LevelState, amount: u64) -> u32 {
    state.exp += amount;

    let mut levels = 0;
    while state.exp_to_next > 0 && state.exp >= state.exp_to_next {
        state.exp -= state.exp_to_next;
        state.level += 1;
        state.exp_to_next = next_exp_requirement(state.exp_to_next);
        levels += 1;
    }
    levels
}

/// Experience requirement for the level after one that needed `current`.
pub fn next_exp_requirement(current: u64) -> u64 {
    (current as f64 * EXP_CURVE_MULTIPLIER).floor() as u64
}
