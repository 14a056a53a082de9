//! Aggregate run statistics read by achievement conditions.

use serde::{Deserialize, Serialize};

/// Monotonic counters persisted across sessions.
///
/// `#[serde(default)]` lets a save written before a counter existed load
/// with that counter at zero instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunStats {
    pub enemies_killed: u64,
    pub total_damage_taken: u64,
    pub total_skill_uses: u64,
}

impl RunStats {
    pub fn record_kill(&mut self) {
        self.enemies_killed += 1;
    }

    pub fn record_damage_taken(&mut self, amount: i32) {
        self.total_damage_taken += amount.max(0) as u64;
    }

    pub fn record_skill_use(&mut self) {
        self.total_skill_uses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let stats: RunStats = serde_json::from_str(r#"{"enemies_killed": 7}"#).unwrap();
        assert_eq!(stats.enemies_killed, 7);
        assert_eq!(stats.total_damage_taken, 0);
        assert_eq!(stats.total_skill_uses, 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let stats: RunStats =
            serde_json::from_str(r#"{"total_skill_uses": 3, "play_time": 99}"#).unwrap();
        assert_eq!(stats.total_skill_uses, 3);
    }

    #[test]
    fn test_counters() {
        let mut stats = RunStats::default();
        stats.record_kill();
        stats.record_damage_taken(6);
        stats.record_skill_use();
        stats.record_skill_use();
        assert_eq!(stats.enemies_killed, 1);
        assert_eq!(stats.total_damage_taken, 6);
        assert_eq!(stats.total_skill_uses, 2);
    }
}
