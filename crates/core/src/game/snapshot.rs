//! Read-only world views for presentation layers and the canonical state hash.

use std::hash::Hasher;

use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::content::template_for;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub xp: u32,
    pub next_xp: u32,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonsterView {
    pub kind: MonsterKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    pub depth: u32,
    pub turn: u64,
    pub phase: ResolverPhase,
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub player: PlayerView,
    pub monsters: Vec<MonsterView>,
    pub chests: Vec<Pos>,
    pub message: Option<String>,
}

impl WorldSnapshot {
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height {
            return TileKind::Wall;
        }
        self.tiles[pos.y as usize * self.width + pos.x as usize]
    }
}

impl Game {
    pub fn snapshot(&self) -> WorldSnapshot {
        let player = &self.state.player;
        WorldSnapshot {
            depth: self.state.depth,
            turn: self.turn,
            phase: self.phase,
            width: self.state.grid.width,
            height: self.state.grid.height,
            tiles: self.state.grid.tiles.clone(),
            player: PlayerView {
                pos: player.pos,
                hp: player.hp.clamp(0, player.max_hp),
                max_hp: player.max_hp,
                attack: player.attack,
                xp: player.xp,
                next_xp: player.next_xp,
                level: player.level,
            },
            monsters: self
                .state
                .monsters
                .values()
                .map(|monster| {
                    let template = template_for(monster.kind);
                    MonsterView {
                        kind: monster.kind,
                        name: template.name,
                        icon: template.icon,
                        pos: monster.pos,
                        hp: monster.hp,
                        max_hp: monster.max_hp,
                    }
                })
                .collect(),
            chests: self.state.chests.values().map(|chest| chest.pos).collect(),
            message: self.message.clone(),
        }
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u32(self.state.depth);
        hasher.write_u32(self.pending_upgrades);
        hasher.write_u8(match self.phase {
            ResolverPhase::Idle => 0,
            ResolverPhase::Paused { .. } => 1,
            ResolverPhase::Terminated => 2,
        });

        let player = &self.state.player;
        for value in [player.pos.y, player.pos.x, player.hp, player.max_hp, player.attack] {
            hasher.write_i32(value);
        }
        for value in [player.xp, player.next_xp, player.level] {
            hasher.write_u32(value);
        }

        for tile in &self.state.grid.tiles {
            hasher.write_u8(*tile as u8);
        }
        for monster in self.state.monsters.values() {
            hasher.write_u8(monster.kind as u8);
            hasher.write_i32(monster.pos.y);
            hasher.write_i32(monster.pos.x);
            hasher.write_i32(monster.hp);
        }
        for chest in self.state.chests.values() {
            hasher.write_i32(chest.pos.y);
            hasher.write_i32(chest.pos.x);
        }

        hasher.finish()
    }
}
