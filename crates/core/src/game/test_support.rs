//! Shared fixtures for the `game` test suites.

use slotmap::SlotMap;

use super::*;
use crate::content::template_for;
use crate::state::{Chest, Monster};

/// Session on an empty, walled 13x13 room with the player on the start cell and no
/// monsters, chests or exit.
pub(super) fn open_arena_game() -> Game {
    let mut game = Game::new(4_242, Rules::default()).expect("default rules are valid");
    game.state.grid = Grid::bordered(13, 13);
    game.state.monsters = SlotMap::with_key();
    game.state.chests = SlotMap::with_key();
    game.state.player.pos = game.rules.start;
    game
}

pub(super) fn add_monster(game: &mut Game, kind: MonsterKind, pos: Pos) -> MonsterId {
    let monster = Monster::from_template(template_for(kind), pos, 0, 0);
    let id = game.state.monsters.insert(monster);
    game.state.monsters[id].id = id;
    id
}

pub(super) fn add_bat(game: &mut Game, pos: Pos) -> MonsterId {
    add_monster(game, MonsterKind::Bat, pos)
}

pub(super) fn add_chest(game: &mut Game, pos: Pos) -> ChestId {
    let id = game.state.chests.insert(Chest { id: ChestId::default(), pos });
    game.state.chests[id].id = id;
    id
}
