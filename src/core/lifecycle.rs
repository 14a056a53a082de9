//! Battle lifecycle phases.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Where the game currently is, from the hub to a finished run.
///
/// ```text
/// Base ──select──▶ DungeonSelect ──start──▶ BattleActive ──▶ Result(outcome)
///   ▲                                          │   ▲              │
///   └────────────── cancel ────────────────────┘   └─advance_floor │
///   └─────────────────────── return_to_base ───────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BattlePhase {
    #[default]
    Base,
    DungeonSelect,
    BattleActive,
    Result(BattleOutcome),
}

impl BattlePhase {
    pub fn is_battle_active(&self) -> bool {
        matches!(self, BattlePhase::BattleActive)
    }

    /// A dungeon may only be entered from the hub screens.
    pub fn can_start_dungeon(&self) -> bool {
        matches!(self, BattlePhase::Base | BattlePhase::DungeonSelect)
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            BattlePhase::Result(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BattlePhase::Base => "Base",
            BattlePhase::DungeonSelect => "Dungeon Select",
            BattlePhase::BattleActive => "Battle",
            BattlePhase::Result(BattleOutcome::Victory) => "Victory",
            BattlePhase::Result(BattleOutcome::Defeat) => "Defeat",
        }
    }
}
