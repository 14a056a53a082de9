//! Save record, serialization and restoration.
//!
//! The record keeps the player's base stats only. Achievement bonuses are
//! rebuilt from the unlock flags on load, so they can never be counted
//! twice. Every field is optional or defaulted so that records written by
//! older builds still load.

use crate::core::constants::SAVE_VERSION;
use crate::core::game::Game;
use crate::core::run_stats::RunStats;
use crate::error::SaveError;
use crate::utils::persistence::SaveStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_to_next: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipped_skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: String,
    #[serde(default)]
    pub usage_count: u64,
    /// Informational only; the rank is recomputed from `usage_count`.
    #[serde(default)]
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<i64>,
}

/// The whole persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub player: PlayerRecord,
    pub skills: Vec<SkillRecord>,
    pub achievements: Vec<AchievementRecord>,
    pub stats: RunStats,
    pub version: String,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            player: PlayerRecord::default(),
            skills: Vec::new(),
            achievements: Vec::new(),
            stats: RunStats::default(),
            version: SAVE_VERSION.to_string(),
        }
    }
}

impl SaveData {
    /// Captures the persistent part of a game.
    pub fn capture(game: &Game) -> Self {
        let p = &game.player;
        Self {
            player: PlayerRecord {
                x: Some(p.x),
                y: Some(p.y),
                hp: Some(p.hp),
                max_hp: Some(p.max_hp),
                mp: Some(p.mp),
                max_mp: Some(p.max_mp),
                attack: Some(p.attack),
                defense: Some(p.defense),
                level: Some(p.level),
                exp: Some(p.exp),
                exp_to_next: Some(p.exp_to_next),
                equipped_skills: Some(p.equipped_skills.clone()),
            },
            skills: game
                .skills
                .all()
                .iter()
                .map(|s| SkillRecord {
                    id: s.id().to_string(),
                    usage_count: s.usage_count,
                    rank: s.rank,
                })
                .collect(),
            achievements: game
                .achievements
                .all()
                .iter()
                .map(|a| AchievementRecord {
                    id: a.id().to_string(),
                    unlocked: a.is_unlocked(),
                    unlocked_at: a.unlocked_at(),
                })
                .collect(),
            stats: game.stats,
            version: SAVE_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Accepts any `1.x` record.
    pub fn check_version(&self) -> Result<(), SaveError> {
        let current_major = SAVE_VERSION.split('.').next();
        if self.version.split('.').next() == current_major {
            Ok(())
        } else {
            Err(SaveError::UnsupportedVersion(self.version.clone()))
        }
    }
}

/// Restores a record into a game.
///
/// Skills, achievements and modifiers are reset to their fresh state
/// first, so restoring the same record twice gives the same result.
/// Catalog entries missing from the record keep their defaults, and
/// record entries unknown to the catalog are skipped.
pub fn restore(game: &mut Game, data: &SaveData) -> Result<(), SaveError> {
    data.check_version()?;

    let player = &mut game.player;
    let record = &data.player;
    player.status_modifiers = Default::default();
    if let Some(v) = record.x {
        player.x = v;
    }
    if let Some(v) = record.y {
        player.y = v;
    }
    if let Some(v) = record.max_hp {
        player.max_hp = v;
    }
    if let Some(v) = record.hp {
        player.hp = v;
    }
    if let Some(v) = record.max_mp {
        player.max_mp = v;
    }
    if let Some(v) = record.mp {
        player.mp = v;
    }
    if let Some(v) = record.attack {
        player.attack = v;
    }
    if let Some(v) = record.defense {
        player.defense = v;
    }
    if let Some(v) = record.level {
        player.level = v;
    }
    if let Some(v) = record.exp {
        player.exp = v;
    }
    if let Some(v) = record.exp_to_next {
        player.exp_to_next = v;
    }
    if let Some(equipped) = &record.equipped_skills {
        player.equipped_skills = equipped
            .iter()
            .filter(|id| game.skills.get(id).is_some())
            .take(crate::core::constants::MAX_EQUIPPED_SKILLS)
            .cloned()
            .collect();
    }

    game.skills = crate::skills::SkillMaster::new();
    for entry in &data.skills {
        match game.skills.get_mut(&entry.id) {
            Some(skill) => skill.restore(entry.usage_count),
            None => warn!(id = %entry.id, "ignoring unknown skill in save"),
        }
    }

    game.achievements = crate::achievements::AchievementMaster::new();
    for entry in &data.achievements {
        if game.achievements.get(&entry.id).is_none() {
            warn!(id = %entry.id, "ignoring unknown achievement in save");
            continue;
        }
        game.achievements
            .restore(&entry.id, entry.unlocked, entry.unlocked_at, &mut game.player);
    }

    game.stats = data.stats;
    game.player.clamp_vitals();
    Ok(())
}

impl Game {
    pub fn save_data(&self) -> SaveData {
        SaveData::capture(self)
    }

    /// Serializes the game into the store.
    pub fn save_to(&self, store: &mut dyn SaveStore) -> Result<(), SaveError> {
        let json = self.save_data().to_json()?;
        store.save(&json)?;
        info!(level = self.player.level, "game saved");
        Ok(())
    }

    /// Loads the store's record into the game.
    ///
    /// Returns `Ok(false)` when the store is empty. A malformed or
    /// unsupported record is reported as an error and leaves the game
    /// untouched.
    pub fn load_from(&mut self, store: &dyn SaveStore) -> Result<bool, SaveError> {
        let Some(json) = store.load()? else {
            return Ok(false);
        };
        let data = SaveData::from_json(&json).inspect_err(|e| warn!("malformed save: {}", e))?;
        restore(self, &data).inspect_err(|e| warn!("save rejected: {}", e))?;
        info!(level = self.player.level, "game loaded");
        Ok(true)
    }
}
