//! Static dungeon definitions.

use super::types::DungeonDef;

pub const ALL_DUNGEONS: &[DungeonDef] = &[
    DungeonDef {
        id: "cave_1",
        name: "Cave of Beginnings",
        description: "A cave where enemies never stop coming",
        floors: 3,
        spawn_table: &["slime", "goblin"],
        spawn_interval_ticks: 180,
    },
    DungeonDef {
        id: "forest_1",
        name: "Forest of Shadows",
        description: "A forest for intermediate adventurers",
        floors: 5,
        spawn_table: &["goblin", "orc", "skeleton"],
        spawn_interval_ticks: 120,
    },
];

pub fn get_dungeon_def(id: &str) -> Option<&'static DungeonDef> {
    ALL_DUNGEONS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::get_archetype;

    #[test]
    fn test_spawn_tables_reference_known_archetypes() {
        for dungeon in ALL_DUNGEONS {
            assert!(!dungeon.spawn_table.is_empty());
            for id in dungeon.spawn_table {
                assert!(get_archetype(id).is_some(), "{} spawns unknown {}", dungeon.id, id);
            }
        }
    }

    #[test]
    fn test_every_dungeon_has_floors_and_interval() {
        for dungeon in ALL_DUNGEONS {
            assert!(dungeon.floors >= 1);
            assert!(dungeon.spawn_interval_ticks > 0);
        }
    }
}
