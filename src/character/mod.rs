//! Player character state and per-tick input.

pub mod input;
pub mod player;

pub use input::{IdleInput, InputSnapshot, InputSource};
pub use player::{Player, StatusModifiers};
