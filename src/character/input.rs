//! Device-agnostic input for the battle tick.
//!
//! The input collaborator (keyboard, gamepad) is polled once per tick and
//! reduced to an [`InputSnapshot`]. Core logic never sees devices or events.

use crate::core::constants::{MAX_EQUIPPED_SKILLS, SKILL_SLOT_COUNT, STICK_DEAD_ZONE};

/// Logical actions held during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Raw analog stick axes in `[-1, 1]`, before dead zone.
    pub stick: Option<(f64, f64)>,
    /// Triggers for the skill catalog slots, in catalog order.
    pub skill_slots: [bool; SKILL_SLOT_COUNT],
    /// Triggers for the equipped skill slots.
    pub equipped_slots: [bool; MAX_EQUIPPED_SKILLS],
    /// Global interrupt back to base.
    pub cancel: bool,
}

/// Source of per-tick input snapshots.
pub trait InputSource {
    fn snapshot(&mut self) -> InputSnapshot;
}

/// Input source that always reports nothing held.
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot::default()
    }
}

impl InputSnapshot {
    pub fn with_skill(slot: usize) -> Self {
        let mut snapshot = Self::default();
        if slot < SKILL_SLOT_COUNT {
            snapshot.skill_slots[slot] = true;
        }
        snapshot
    }

    pub fn cancel() -> Self {
        Self {
            cancel: true,
            ..Default::default()
        }
    }

    /// Combined movement direction, normalized to unit length.
    ///
    /// Digital axes and the analog stick are summed before normalizing.
    /// Returns `None` when there is no movement.
    pub fn movement_vector(&self) -> Option<(f64, f64)> {
        let mut dx = 0.0;
        let mut dy = 0.0;

        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }

        if let Some((sx, sy)) = self.stick {
            let (sx, sy) = apply_dead_zone(sx, sy);
            dx += sx;
            dy += sy;
        }

        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        let length = (dx * dx + dy * dy).sqrt();
        Some((dx / length, dy / length))
    }
}

/// Zeroes each stick axis whose magnitude does not exceed the dead zone.
pub fn apply_dead_zone(x: f64, y: f64) -> (f64, f64) {
    let x = if x.abs() > STICK_DEAD_ZONE { x } else { 0.0 };
    let y = if y.abs() > STICK_DEAD_ZONE { y } else { 0.0 };
    (x, y)
}
