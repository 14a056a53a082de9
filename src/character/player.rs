//! The single persistent player character.

use crate::achievements::PassiveEffects;
use crate::core::combat_math::{apply_damage, resolve_damage};
use crate::core::constants::*;
use crate::core::progression::{apply_exp, LevelState};

/// Additive stat bonuses granted by unlocked achievements.
///
/// Base stats on [`Player`] never include these; effective stats are
/// base + modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusModifiers {
    pub attack: i32,
    pub defense: i32,
    pub max_hp: i32,
    pub max_mp: i32,
    pub speed: f64,
}

impl StatusModifiers {
    pub fn add(&mut self, effects: &PassiveEffects) {
        self.attack += effects.attack;
        self.defense += effects.defense;
        self.max_hp += effects.max_hp;
        self.max_mp += effects.max_mp;
        self.speed += effects.speed;
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub max_hp: i32,
    pub hp: i32,
    pub max_mp: i32,
    pub mp: f64,
    pub attack: i32,
    pub defense: i32,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub mp_regen_per_tick: f64,
    pub status_modifiers: StatusModifiers,
    /// Skill ids bound to the three equipped slots.
    pub equipped_skills: Vec<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            radius: PLAYER_RADIUS,
            speed: PLAYER_BASE_SPEED,
            max_hp: PLAYER_BASE_MAX_HP,
            hp: PLAYER_BASE_MAX_HP,
            max_mp: PLAYER_BASE_MAX_MP,
            mp: PLAYER_BASE_MAX_MP as f64,
            attack: PLAYER_BASE_ATTACK,
            defense: PLAYER_BASE_DEFENSE,
            level: 1,
            exp: 0,
            exp_to_next: PLAYER_BASE_EXP_TO_NEXT,
            mp_regen_per_tick: PLAYER_MP_REGEN_PER_TICK,
            status_modifiers: StatusModifiers::default(),
            equipped_skills: Vec::new(),
        }
    }

    // Effective stats

    pub fn effective_attack(&self) -> i32 {
        self.attack + self.status_modifiers.attack
    }

    pub fn effective_defense(&self) -> i32 {
        self.defense + self.status_modifiers.defense
    }

    pub fn effective_max_hp(&self) -> i32 {
        self.max_hp + self.status_modifiers.max_hp
    }

    pub fn effective_max_mp(&self) -> i32 {
        self.max_mp + self.status_modifiers.max_mp
    }

    pub fn effective_speed(&self) -> f64 {
        self.speed + self.status_modifiers.speed
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn hp_ratio(&self) -> f64 {
        let max = self.effective_max_hp();
        if max <= 0 {
            return 0.0;
        }
        self.hp as f64 / max as f64
    }

    /// Takes a raw hit through the damage formula. Returns damage dealt.
    pub fn take_damage(&mut self, raw_power: i32) -> i32 {
        let damage = resolve_damage(raw_power, self.effective_defense());
        self.hp = apply_damage(self.hp, damage);
        damage
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.effective_max_hp());
    }

    pub fn restore_mp(&mut self, amount: f64) {
        self.mp = (self.mp + amount).min(self.effective_max_mp() as f64);
    }

    /// Spends MP if enough is available. No mutation on failure.
    pub fn consume_mp(&mut self, amount: u32) -> bool {
        if self.mp >= amount as f64 {
            self.mp -= amount as f64;
            true
        } else {
            false
        }
    }

    /// Refills hp and mp to the effective maxima.
    pub fn restore_full(&mut self) {
        self.hp = self.effective_max_hp();
        self.mp = self.effective_max_mp() as f64;
    }

    /// Passive MP regeneration for one tick. HP does not regenerate.
    pub fn regen_tick(&mut self) {
        if self.mp < self.effective_max_mp() as f64 {
            self.restore_mp(self.mp_regen_per_tick);
        }
    }

    /// Gains experience, applying every level-up it triggers.
    /// Returns the number of levels gained.
    pub fn gain_exp(&mut self, amount: u64) -> u32 {
        let mut levels = LevelState {
            level: self.level,
            exp: self.exp,
            exp_to_next: self.exp_to_next,
        };
        let gained = apply_exp(&mut levels, amount);

        self.level = levels.level;
        self.exp = levels.exp;
        self.exp_to_next = levels.exp_to_next;

        if gained > 0 {
            let gained = gained as i32;
            self.max_hp += LEVEL_UP_MAX_HP * gained;
            self.max_mp += LEVEL_UP_MAX_MP * gained;
            self.attack += LEVEL_UP_ATTACK * gained;
            self.defense += LEVEL_UP_DEFENSE * gained;
            self.restore_full();
        }
        gained as u32
    }

    /// Adds achievement bonuses to the modifiers.
    ///
    /// With `top_up`, current hp/mp rise by the max deltas so the bonus is
    /// usable immediately.
    pub fn apply_passive_effects(&mut self, effects: &PassiveEffects, top_up: bool) {
        self.status_modifiers.add(effects);
        if top_up {
            self.hp += effects.max_hp;
            self.mp += effects.max_mp as f64;
        }
        self.clamp_vitals();
    }

    /// Forces `0 <= hp <= max` and `0 <= mp <= max` on effective maxima.
    pub fn clamp_vitals(&mut self) {
        self.hp = self.hp.clamp(0, self.effective_max_hp().max(0));
        self.mp = self.mp.clamp(0.0, self.effective_max_mp().max(0) as f64);
    }

    /// Moves by a unit direction scaled by effective speed, kept inside the arena.
    pub fn move_by(&mut self, dir_x: f64, dir_y: f64, arena_width: f64, arena_height: f64) {
        let speed = self.effective_speed();
        let margin = self.radius;
        let new_x = self.x + dir_x * speed;
        let new_y = self.y + dir_y * speed;
        self.x = new_x.min(arena_width - margin).max(margin);
        self.y = new_y.min(arena_height - margin).max(margin);
    }
}
