//! Timed visual effects handed to the renderer.

use crate::core::constants::{ATTACK_LINE_LIFE, DAMAGE_POPUP_LIFE, DAMAGE_POPUP_RISE_PER_TICK};

pub const DAMAGE_COLOR: &str = "#ff6b6b";
pub const HEAL_COLOR: &str = "#51cf66";

/// Floating damage or heal number.
#[derive(Debug, Clone, PartialEq)]
pub struct DamagePopup {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: &'static str,
    pub life: u32,
    /// Vertical drift so far; negative is up.
    pub offset_y: f64,
}

impl DamagePopup {
    pub fn new(x: f64, y: f64, text: impl Into<String>, color: &'static str) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
            life: DAMAGE_POPUP_LIFE,
            offset_y: 0.0,
        }
    }

    pub fn damage(x: f64, y: f64, amount: i32) -> Self {
        Self::new(x, y, format!("-{}", amount), DAMAGE_COLOR)
    }

    pub fn heal(x: f64, y: f64, amount: i32) -> Self {
        Self::new(x, y, format!("+{}", amount), HEAL_COLOR)
    }

    /// Ages the popup by one tick. Returns false once it has expired.
    pub fn update(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.offset_y -= DAMAGE_POPUP_RISE_PER_TICK;
        self.life > 0
    }
}

/// Line from the player to the enemy hit by the last offensive skill.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackLine {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub color: &'static str,
    pub life: u32,
}

impl AttackLine {
    pub fn new(start: (f64, f64), end: (f64, f64), color: &'static str) -> Self {
        Self {
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
            color,
            life: ATTACK_LINE_LIFE,
        }
    }

    pub fn update(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// Ages every popup and drops the expired ones.
pub fn update_popups(popups: &mut Vec<DamagePopup>) {
    popups.retain_mut(|p| p.update());
}
