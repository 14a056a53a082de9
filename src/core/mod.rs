//! Core game state, formulas and the battle loop.

pub mod battle_log;
pub mod combat_math;
pub mod constants;
pub mod game;
pub mod lifecycle;
pub mod progression;
pub mod run_stats;
pub mod tick;

pub use battle_log::{BattleLog, LogEntry, LogKind};
pub use game::Game;
pub use lifecycle::{BattleOutcome, BattlePhase};
pub use run_stats::RunStats;
pub use tick::{game_tick, TickEvent, TickResult};
