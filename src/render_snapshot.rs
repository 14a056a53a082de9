//! Per-tick payload for the rendering collaborator.

use crate::combat::{AttackLine, DamagePopup};
use crate::core::game::Game;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Current hp over effective max hp.
    pub hp_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyView {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hp_ratio: f64,
    pub color: &'static str,
}

/// Everything a renderer needs to draw one frame of battle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub popups: Vec<DamagePopup>,
    pub attack_line: Option<AttackLine>,
}

impl Game {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let p = &self.player;
        RenderSnapshot {
            player: PlayerView {
                x: p.x,
                y: p.y,
                radius: p.radius,
                hp_ratio: p.hp_ratio(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    name: e.name,
                    x: e.x,
                    y: e.y,
                    radius: e.radius,
                    hp_ratio: e.hp_ratio(),
                    color: e.color,
                })
                .collect(),
            popups: self.popups.clone(),
            attack_line: self.attack_line.clone().filter(|line| line.life > 0),
        }
    }
}
