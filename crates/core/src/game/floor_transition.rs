//! Floor installation: replaces terrain and floor-scoped entities, keeps the player.

use slotmap::SlotMap;

use super::*;
use crate::content::template_for;
use crate::mapgen::generate_floor;
use crate::state::{Chest, Monster};

impl Game {
    pub(super) fn enter_floor(&mut self, depth: u32) {
        let generated = generate_floor(self.seed, depth, &self.rules);

        let mut monsters = SlotMap::with_key();
        for spawn in &generated.monster_spawns {
            let monster = Monster::from_template(
                template_for(spawn.kind),
                spawn.pos,
                depth,
                self.rules.monster_hp_per_depth,
            );
            let id = monsters.insert(monster);
            monsters[id].id = id;
        }

        let mut chests = SlotMap::with_key();
        for &pos in &generated.chest_spawns {
            let id = chests.insert(Chest { id: ChestId::default(), pos });
            chests[id].id = id;
        }

        self.state.grid = generated.grid;
        self.state.monsters = monsters;
        self.state.chests = chests;
        self.state.player.pos = generated.start;
        self.state.depth = depth;
        self.record(LogEvent::FloorEntered {
            depth,
            attempts: generated.attempts,
            connected: generated.connected,
        });
    }
}
