//! Static enemy archetype definitions.

use tracing::warn;

/// Type-derived stats shared by every enemy of one archetype.
#[derive(Debug, Clone)]
pub struct EnemyArchetype {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub exp: u64,
    pub radius: f64,
    pub color: &'static str,
}

/// Archetype used when a lookup misses.
pub const DEFAULT_ARCHETYPE_ID: &str = "goblin";

pub const ALL_ENEMY_ARCHETYPES: &[EnemyArchetype] = &[
    EnemyArchetype {
        id: "goblin",
        name: "Goblin",
        max_hp: 50,
        attack: 8,
        defense: 2,
        exp: 20,
        radius: 12.0,
        color: "#51cf66",
    },
    EnemyArchetype {
        id: "orc",
        name: "Orc",
        max_hp: 100,
        attack: 15,
        defense: 5,
        exp: 50,
        radius: 18.0,
        color: "#ff6b6b",
    },
    EnemyArchetype {
        id: "slime",
        name: "Slime",
        max_hp: 30,
        attack: 5,
        defense: 1,
        exp: 10,
        radius: 10.0,
        color: "#339af0",
    },
    EnemyArchetype {
        id: "skeleton",
        name: "Skeleton",
        max_hp: 80,
        attack: 12,
        defense: 4,
        exp: 40,
        radius: 14.0,
        color: "#dee2e6",
    },
];

pub fn get_archetype(id: &str) -> Option<&'static EnemyArchetype> {
    ALL_ENEMY_ARCHETYPES.iter().find(|a| a.id == id)
}

/// Looks up an archetype, falling back to the default one for unknown ids.
pub fn archetype_or_default(id: &str) -> &'static EnemyArchetype {
    if let Some(archetype) = get_archetype(id) {
        return archetype;
    }
    warn!(id, "unknown enemy archetype, using {}", DEFAULT_ARCHETYPE_ID);
    &ALL_ENEMY_ARCHETYPES[0]
}
