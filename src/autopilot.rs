//! A simple scripted player for headless runs.
//!
//! The autopilot heals when hurt, otherwise fires the first ready offensive
//! skill it can afford, backs away from enemies that get too close and
//! advances floors as soon as they are cleared. It reads the game but only
//! acts through input snapshots and the public lifecycle API.

use crate::character::InputSnapshot;
use crate::combat::nearest_enemy;
use crate::core::combat_math::distance;
use crate::core::game::Game;
use crate::core::tick::TickResult;
use rand::Rng;

/// Hp ratio below which the autopilot heals.
const HEAL_THRESHOLD: f64 = 0.5;
/// Distance at which the autopilot starts backing off.
const KITE_DISTANCE: f64 = 60.0;

/// Builds the input for the next tick.
pub fn decide(game: &Game) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    let player = &game.player;

    let mut chosen = None;
    for (slot, skill) in game.skills.all().iter().enumerate() {
        let affordable = player.mp >= skill.current_cost() as f64;
        if !skill.is_ready() || !affordable {
            continue;
        }
        let wanted = if skill.element().is_offensive() {
            !game.enemies.is_empty()
        } else {
            player.hp_ratio() < HEAL_THRESHOLD
        };
        if !wanted {
            continue;
        }
        // Healing takes priority over attacking.
        if !skill.element().is_offensive() {
            chosen = Some(slot);
            break;
        }
        chosen.get_or_insert(slot);
    }
    if let Some(slot) = chosen {
        input.skill_slots[slot] = true;
    }

    if let Some(index) = nearest_enemy(&game.enemies, player.x, player.y) {
        let enemy = &game.enemies[index];
        if distance(player.x, player.y, enemy.x, enemy.y) < KITE_DISTANCE + enemy.radius {
            input.left = enemy.x > player.x;
            input.right = enemy.x < player.x;
            input.up = enemy.y > player.y;
            input.down = enemy.y < player.y;
        }
    }

    input
}

/// Plays one tick: advances a cleared floor, then ticks with [`decide`].
pub fn step<R: Rng>(game: &mut Game, rng: &mut R) -> TickResult {
    if game.is_floor_cleared() {
        game.advance_floor();
    }
    let input = decide(game);
    game.tick(&input, rng)
}
