use super::data::{archetype_or_default, EnemyArchetype};
use crate::core::combat_math::{apply_damage, resolve_damage};
use crate::core::constants::{ENEMY_ATTACK_INTERVAL_TICKS, ENEMY_SPEED};

/// A live enemy in the battle roster.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub archetype_id: &'static str,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub exp: u64,
    pub color: &'static str,
    pub attack_cooldown: u32,
    pub attack_interval: u32,
}

impl Enemy {
    pub fn from_archetype(archetype: &'static EnemyArchetype, x: f64, y: f64) -> Self {
        Self {
            archetype_id: archetype.id,
            name: archetype.name,
            x,
            y,
            radius: archetype.radius,
            speed: ENEMY_SPEED,
            max_hp: archetype.max_hp,
            hp: archetype.max_hp,
            attack: archetype.attack,
            defense: archetype.defense,
            exp: archetype.exp,
            color: archetype.color,
            attack_cooldown: 0,
            attack_interval: ENEMY_ATTACK_INTERVAL_TICKS,
        }
    }

    /// Spawns an enemy by archetype id. Unknown ids become goblins.
    pub fn spawn(archetype_id: &str, x: f64, y: f64) -> Self {
        Self::from_archetype(archetype_or_default(archetype_id), x, y)
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }

    /// Applies a hit through defense. Returns the damage actually dealt.
    pub fn take_damage(&mut self, raw_power: i32) -> i32 {
        let damage = resolve_damage(raw_power, self.defense);
        self.hp = apply_damage(self.hp, damage);
        damage
    }
}
