//! Shared combat math functions.
//!
//! These pure functions calculate combat outcomes without side effects.
//! The same damage formula is used in both directions (player skill on an
//! enemy, enemy contact attack on the player).

/// Calculate actual damage after defense.
///
/// Defense can reduce damage down to 1 but never to 0 or below.
pub fn resolve_damage(raw_power: i32, defense: i32) -> i32 {
    raw_power.saturating_sub(defense).max(1)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    (current_hp - damage).max(0)
}

/// Euclidean distance between two points.
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Index of the position closest to `(px, py)`.
///
/// Ties go to the earliest position in iteration order. Returns `None` for
/// an empty iterator.
pub fn find_nearest<I>(positions: I, px: f64, py: f64) -> Option<usize>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut nearest = None;
    let mut nearest_distance = f64::INFINITY;

    for (i, (x, y)) in positions.into_iter().enumerate() {
        let d = distance(px, py, x, y);
        if d < nearest_distance {
            nearest_distance = d;
            nearest = Some(i);
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_damage() {
        assert_eq!(resolve_damage(20, 2), 18);
        assert_eq!(resolve_damage(10, 0), 10);
    }

    #[test]
    fn test_resolve_damage_floor_is_one() {
        for attack in 0..=20 {
            for defense in attack..=25 {
                assert_eq!(resolve_damage(attack, defense), 1);
            }
        }
    }

    #[test]
    fn test_apply_damage() {
        assert_eq!(apply_damage(100, 30), 70);
        assert_eq!(apply_damage(30, 100), 0);
        assert_eq!(apply_damage(50, 0), 50);
    }

    #[test]
    fn test_find_nearest() {
        let positions = vec![(100.0, 0.0), (10.0, 0.0), (50.0, 0.0)];
        assert_eq!(find_nearest(positions, 0.0, 0.0), Some(1));
    }

    #[test]
    fn test_find_nearest_tie_keeps_first() {
        let positions = vec![(0.0, 10.0), (10.0, 0.0), (-10.0, 0.0)];
        assert_eq!(find_nearest(positions, 0.0, 0.0), Some(0));
    }

    #[test]
    fn test_find_nearest_empty() {
        let positions: Vec<(f64, f64)> = Vec::new();
        assert_eq!(find_nearest(positions, 0.0, 0.0), None);
    }
}
