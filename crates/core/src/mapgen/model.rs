//! Public data models for generated floors and their spawns.

use crate::state::Grid;
use crate::types::{MonsterKind, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSpawn {
    pub kind: MonsterKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub depth: u32,
    pub grid: Grid,
    pub start: Pos,
    /// `None` only when every attempt failed to find any exit cell.
    pub exit: Option<Pos>,
    pub attempts: u32,
    /// False when the retry budget ran out and the last layout was kept as is.
    pub connected: bool,
    pub monster_spawns: Vec<MonsterSpawn>,
    pub chest_spawns: Vec<Pos>,
}

impl GeneratedFloor {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.depth.to_le_bytes());
        bytes.extend((self.grid.width as u32).to_le_bytes());
        bytes.extend((self.grid.height as u32).to_le_bytes());
        for tile in &self.grid.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
                TileKind::Exit => 2,
            });
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        match self.exit {
            Some(exit) => {
                bytes.push(1);
                bytes.extend(exit.y.to_le_bytes());
                bytes.extend(exit.x.to_le_bytes());
            }
            None => bytes.push(0),
        }
        bytes.extend(self.attempts.to_le_bytes());
        bytes.push(u8::from(self.connected));

        bytes.extend((self.monster_spawns.len() as u32).to_le_bytes());
        for spawn in &self.monster_spawns {
            bytes.push(match spawn.kind {
                MonsterKind::Bat => 0,
                MonsterKind::Ghost => 1,
                MonsterKind::Ogre => 2,
            });
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }

        bytes.extend((self.chest_spawns.len() as u32).to_le_bytes());
        for pos in &self.chest_spawns {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }

        bytes
    }

    /// Every cell an entity starts on, player included.
    pub fn spawn_cells(&self) -> Vec<Pos> {
        let mut cells = vec![self.start];
        cells.extend(self.monster_spawns.iter().map(|spawn| spawn.pos));
        cells.extend(self.chest_spawns.iter().copied());
        cells
    }
}
