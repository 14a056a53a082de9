//! Skill types: static definitions plus mastery progress.

use super::data::ALL_SKILLS;
use crate::core::progression::{rank_name, skill_current_cost, skill_current_damage, skill_rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Ice,
    Thunder,
    Heal,
    Physical,
}

impl Element {
    /// Offensive skills target the nearest enemy; the rest act on the player.
    pub fn is_offensive(&self) -> bool {
        !matches!(self, Element::Heal)
    }

    /// Color of the attack line drawn for this element.
    pub fn attack_line_color(&self) -> &'static str {
        match self {
            Element::Fire => "#ff4500",
            Element::Ice => "#00ffff",
            _ => "#ffff00",
        }
    }
}

/// Static definition of a skill.
#[derive(Debug, Clone)]
pub struct SkillDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: u32,
    pub base_damage: u32,
    pub element: Element,
    pub base_cooldown_ticks: u32,
}

/// A skill instance with mastery progress.
#[derive(Debug, Clone)]
pub struct Skill {
    def: &'static SkillDef,
    pub usage_count: u64,
    /// Cached `skill_rank(usage_count)`.
    pub rank: u32,
    pub current_cooldown_ticks: u32,
}

impl Skill {
    pub fn new(def: &'static SkillDef) -> Self {
        Self {
            def,
            usage_count: 0,
            rank: 1,
            current_cooldown_ticks: 0,
        }
    }

    pub fn def(&self) -> &'static SkillDef {
        self.def
    }

    pub fn id(&self) -> &'static str {
        self.def.id
    }

    pub fn element(&self) -> Element {
        self.def.element
    }

    pub fn current_cost(&self) -> u32 {
        skill_current_cost(self.def.base_cost, self.usage_count)
    }

    pub fn current_damage(&self) -> u32 {
        skill_current_damage(self.def.base_damage, self.usage_count)
    }

    pub fn display_name(&self) -> String {
        rank_name(self.def.name, self.rank)
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown_ticks == 0
    }

    pub fn tick_cooldown(&mut self) {
        if self.current_cooldown_ticks > 0 {
            self.current_cooldown_ticks -= 1;
        }
    }

    /// Records one use: bumps the usage count, starts the cooldown and
    /// re-derives the rank. Returns true if the rank went up.
    pub fn record_use(&mut self) -> bool {
        self.usage_count += 1;
        self.current_cooldown_ticks = self.def.base_cooldown_ticks;
        self.refresh_rank()
    }

    /// Re-derives the cached rank from the usage count. Never lowers it.
    pub fn refresh_rank(&mut self) -> bool {
        let new_rank = skill_rank(self.usage_count).max(self.rank);
        if new_rank > self.rank {
            self.rank = new_rank;
            true
        } else {
            false
        }
    }

    /// Restores persisted progress. The rank is always recomputed.
    pub fn restore(&mut self, usage_count: u64) {
        self.usage_count = usage_count;
        self.rank = skill_rank(usage_count);
        self.current_cooldown_ticks = 0;
    }
}

/// Owns every skill instance, in catalog (slot) order.
#[derive(Debug, Clone)]
pub struct SkillMaster {
    skills: Vec<Skill>,
}

impl Default for SkillMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMaster {
    pub fn new() -> Self {
        Self {
            skills: ALL_SKILLS.iter().map(Skill::new).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id() == id)
    }

    /// Skill bound to a catalog slot.
    pub fn by_slot(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot)
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn tick_cooldowns(&mut self) {
        for skill in &mut self.skills {
            skill.tick_cooldown();
        }
    }

    pub fn ranks(&self) -> Vec<u32> {
        self.skills.iter().map(|s| s.rank).collect()
    }
}
