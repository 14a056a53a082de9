//! Delve - action-RPG progression and combat simulation.
//!
//! The library holds the whole simulation: catalogs, entities, formulas,
//! the battle lifecycle and save handling. Rendering and device input stay
//! outside; they talk to the game through [`character::InputSnapshot`],
//! [`render_snapshot::RenderSnapshot`] and [`utils::SaveStore`].

pub mod achievements;
pub mod autopilot;
pub mod character;
pub mod combat;
pub mod config;
pub mod core;
pub mod dungeon;
pub mod error;
pub mod render_snapshot;
pub mod save_manager;
pub mod skills;
pub mod utils;

pub use crate::core::{Game, TickEvent, TickResult};
