//! Runtime configuration of a game instance.

use crate::core::constants::{
    ACHIEVEMENT_CHECK_INTERVAL_TICKS, ARENA_HEIGHT, ARENA_WIDTH, AUTOSAVE_INTERVAL_SECONDS,
    TICKS_PER_SECOND,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    /// Ticks between achievement polls.
    pub achievement_check_interval: u64,
    /// Ticks between autosaves requested by the driver. Zero disables them.
    pub autosave_interval_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            achievement_check_interval: ACHIEVEMENT_CHECK_INTERVAL_TICKS,
            autosave_interval_ticks: AUTOSAVE_INTERVAL_SECONDS * TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    pub fn arena_center(&self) -> (f64, f64) {
        (self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
