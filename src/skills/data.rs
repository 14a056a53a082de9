//! Static skill definitions.

use super::types::{Element, SkillDef};
use crate::core::constants::SKILL_DEFAULT_COOLDOWN_TICKS;

/// All skill definitions in slot order.
pub const ALL_SKILLS: &[SkillDef] = &[
    SkillDef {
        id: "fire_ball",
        name: "Fire Ball",
        description: "Fire-element attack spell",
        base_cost: 10,
        base_damage: 20,
        element: Element::Fire,
        base_cooldown_ticks: SKILL_DEFAULT_COOLDOWN_TICKS,
    },
    SkillDef {
        id: "ice_arrow",
        name: "Ice Arrow",
        description: "Ice-element attack spell",
        base_cost: 12,
        base_damage: 25,
        element: Element::Ice,
        base_cooldown_ticks: SKILL_DEFAULT_COOLDOWN_TICKS,
    },
    SkillDef {
        id: "thunder",
        name: "Thunder",
        description: "Lightning-element attack spell",
        base_cost: 15,
        base_damage: 30,
        element: Element::Thunder,
        base_cooldown_ticks: SKILL_DEFAULT_COOLDOWN_TICKS,
    },
    SkillDef {
        id: "heal",
        name: "Heal",
        description: "Restores HP",
        base_cost: 8,
        base_damage: 30,
        element: Element::Heal,
        base_cooldown_ticks: SKILL_DEFAULT_COOLDOWN_TICKS,
    },
    SkillDef {
        id: "power_strike",
        name: "Power Strike",
        description: "Physical attack skill",
        base_cost: 5,
        base_damage: 35,
        element: Element::Physical,
        base_cooldown_ticks: SKILL_DEFAULT_COOLDOWN_TICKS,
    },
];

pub fn get_skill_def(id: &str) -> Option<&'static SkillDef> {
    ALL_SKILLS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_ids_unique() {
        let ids: HashSet<_> = ALL_SKILLS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), ALL_SKILLS.len());
    }

    #[test]
    fn test_only_heal_is_support() {
        let support: Vec<_> = ALL_SKILLS
            .iter()
            .filter(|d| !d.element.is_offensive())
            .map(|d| d.id)
            .collect();
        assert_eq!(support, vec!["heal"]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_skill_def("thunder").unwrap().base_cost, 15);
        assert!(get_skill_def("meteor").is_none());
    }
}
