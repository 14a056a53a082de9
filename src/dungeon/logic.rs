//! Enemy generation policies.
//!
//! Two independent policies fill the roster: the initial wave placed when a
//! floor starts, tiered by floor number, and the periodic spawner, which
//! draws from the dungeon's own spawn table and enters from an arena edge.

use super::types::DungeonDef;
use crate::combat::Enemy;
use crate::core::constants::{
    WAVE_BASE_SIZE, WAVE_ORC_FLOOR, WAVE_RING_RADIUS, WAVE_SKELETON_FLOOR,
};
use rand::Rng;
use std::f64::consts::TAU;

/// Number of enemies in the initial wave of a floor.
pub fn wave_size(floor: u32) -> u32 {
    WAVE_BASE_SIZE + floor
}

/// Archetype of every enemy in the initial wave of a floor.
pub fn wave_archetype(floor: u32) -> &'static str {
    if floor >= WAVE_SKELETON_FLOOR {
        "skeleton"
    } else if floor >= WAVE_ORC_FLOOR {
        "orc"
    } else {
        "goblin"
    }
}

/// Builds a floor's initial wave, evenly spaced on a ring around the player.
pub fn initial_wave(floor: u32, center_x: f64, center_y: f64) -> Vec<Enemy> {
    let count = wave_size(floor);
    let archetype = wave_archetype(floor);

    (0..count)
        .map(|i| {
            let angle = TAU / count as f64 * i as f64;
            Enemy::spawn(
                archetype,
                center_x + angle.cos() * WAVE_RING_RADIUS,
                center_y + angle.sin() * WAVE_RING_RADIUS,
            )
        })
        .collect()
}

/// Spawns one enemy from the dungeon's table at the left or right edge.
///
/// Never panics on a zero or negative arena height.
pub fn periodic_spawn(
    dungeon: &DungeonDef,
    arena_width: f64,
    arena_height: f64,
    rng: &mut impl Rng,
) -> Enemy {
    let archetype = if dungeon.spawn_table.is_empty() {
        "slime"
    } else {
        dungeon.spawn_table[rng.gen_range(0..dungeon.spawn_table.len())]
    };
    let x = if rng.gen_bool(0.5) { 0.0 } else { arena_width };
    // Degenerate arenas collapse to the top edge.
    let y = if arena_height > 0.0 {
        rng.gen_range(0.0..arena_height)
    } else {
        0.0
    };
    Enemy::spawn(archetype, x, y)
}
