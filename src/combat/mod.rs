//! Enemies, their pursuit behavior and the visual effects of hits.

pub mod data;
pub mod effects;
pub mod logic;
pub mod types;

pub use data::{archetype_or_default, get_archetype, EnemyArchetype, ALL_ENEMY_ARCHETYPES};
pub use effects::{update_popups, AttackLine, DamagePopup};
pub use logic::{nearest_enemy, update_enemy};
pub use types::Enemy;
