//! Enemy pursuit and contact attacks.

use super::types::Enemy;
use crate::core::combat_math::find_nearest;
use crate::core::constants::ENEMY_CONTACT_MARGIN;

/// Advances one enemy by a tick.
///
/// The enemy walks straight at the player until the collision circles
/// touch. The distance used for the attack check is measured before the
/// move. Returns the raw attack power when the enemy strikes this tick.
pub fn update_enemy(
    enemy: &mut Enemy,
    player_x: f64,
    player_y: f64,
    player_radius: f64,
) -> Option<i32> {
    let dx = player_x - enemy.x;
    let dy = player_y - enemy.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let contact = enemy.radius + player_radius;

    if distance > 0.0 && distance > contact {
        enemy.x += dx / distance * enemy.speed;
        enemy.y += dy / distance * enemy.speed;
    }

    if enemy.attack_cooldown > 0 {
        enemy.attack_cooldown -= 1;
        None
    } else if distance <= contact + ENEMY_CONTACT_MARGIN {
        enemy.attack_cooldown = enemy.attack_interval;
        Some(enemy.attack)
    } else {
        None
    }
}

/// Index of the roster enemy closest to the point. First wins ties.
pub fn nearest_enemy(roster: &[Enemy], x: f64, y: f64) -> Option<usize> {
    find_nearest(roster.iter().map(|e| (e.x, e.y)), x, y)
}
