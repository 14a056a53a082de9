//! Skill catalog and mastery progress.
//!
//! Every skill grows cheaper and stronger the more it is used, and ranks
//! up along a fixed usage ladder.

pub mod data;
pub mod types;

pub use data::{get_skill_def, ALL_SKILLS};
pub use types::{Element, Skill, SkillDef, SkillMaster};
