//! Dungeons, their floors and the policies that populate a battle.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_dungeon_def, ALL_DUNGEONS};
pub use logic::{initial_wave, periodic_spawn, wave_archetype, wave_size};
pub use types::{Dungeon, DungeonDef, DungeonMaster};
