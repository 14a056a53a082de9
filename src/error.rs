//! Error types surfaced by the game API.

use thiserror::Error;

/// Why a skill could not be used. No state changes when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillUseError {
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("skill is on cooldown ({remaining} ticks left)")]
    OnCooldown { remaining: u32 },

    #[error("not enough MP (need {needed}, have {available})")]
    InsufficientMp { needed: u32, available: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown dungeon: {0}")]
    UnknownDungeon(String),

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("at most {0} skills can be equipped")]
    EquipLimit(usize),
}

/// Errors raised while reading or writing save data.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version: {0}")]
    UnsupportedVersion(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}
