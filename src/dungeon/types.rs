//! Dungeon definitions and per-run floor progress.

use super::data::ALL_DUNGEONS;

/// Static definition of a dungeon.
#[derive(Debug, Clone)]
pub struct DungeonDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub floors: u32,
    /// Archetype ids drawn from by the periodic spawner.
    pub spawn_table: &'static [&'static str],
    pub spawn_interval_ticks: u32,
}

#[derive(Debug, Clone)]
pub struct Dungeon {
    def: &'static DungeonDef,
    pub current_floor: u32,
}

impl Dungeon {
    pub fn new(def: &'static DungeonDef) -> Self {
        Self {
            def,
            current_floor: 1,
        }
    }

    pub fn def(&self) -> &'static DungeonDef {
        self.def
    }

    pub fn id(&self) -> &'static str {
        self.def.id
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn floors(&self) -> u32 {
        self.def.floors
    }

    pub fn is_final_floor(&self) -> bool {
        self.current_floor >= self.def.floors
    }

    pub fn reset(&mut self) {
        self.current_floor = 1;
    }
}

#[derive(Debug, Clone)]
pub struct DungeonMaster {
    dungeons: Vec<Dungeon>,
}

impl Default for DungeonMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl DungeonMaster {
    pub fn new() -> Self {
        Self {
            dungeons: ALL_DUNGEONS.iter().map(Dungeon::new).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Dungeon> {
        self.dungeons.iter().find(|d| d.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Dungeon> {
        self.dungeons.iter_mut().find(|d| d.id() == id)
    }

    pub fn all(&self) -> &[Dungeon] {
        &self.dungeons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_floor() {
        let mut master = DungeonMaster::new();
        let cave = master.get_mut("cave_1").unwrap();
        assert_eq!(cave.current_floor, 1);
        assert!(!cave.is_final_floor());
        cave.current_floor = 3;
        assert!(cave.is_final_floor());
        cave.reset();
        assert_eq!(cave.current_floor, 1);
    }

    #[test]
    fn test_lookup() {
        let master = DungeonMaster::new();
        assert_eq!(master.all().len(), 2);
        assert_eq!(master.get("forest_1").unwrap().floors(), 5);
        assert!(master.get("volcano_1").is_none());
    }
}
