//! Greedy chase: each monster closes the x gap first, then the y gap, with no
//! pathing around obstacles.

use super::*;

impl Game {
    /// Runs every live monster once, in slot order. Stops as soon as the player dies.
    pub(super) fn run_monster_phase(&mut self) {
        let ids: Vec<MonsterId> = self.state.monsters.keys().collect();
        for id in ids {
            if self.state.player.is_dead() {
                break;
            }
            self.act_monster(id);
        }
    }

    fn act_monster(&mut self, id: MonsterId) {
        let Some(monster) = self.state.monsters.get(id) else {
            return;
        };
        let player_pos = self.state.player.pos;
        let next = greedy_step(monster.pos, player_pos);

        if next == player_pos {
            let (kind, damage) = (monster.kind, monster.attack);
            self.state.player.take_damage(damage);
            self.record(LogEvent::MonsterAttacked { monster: kind, damage });
            return;
        }

        if self.is_open_for_monster(next) {
            self.state.monsters[id].pos = next;
        }
    }

    /// Plain floor with no monster or chest on it. Exit cells are off limits.
    fn is_open_for_monster(&self, pos: Pos) -> bool {
        self.state.grid.tile_at(pos) == TileKind::Floor
            && self.state.monster_at(pos).is_none()
            && self.state.chest_at(pos).is_none()
    }
}

pub(super) fn greedy_step(from: Pos, target: Pos) -> Pos {
    let dx = (target.x - from.x).signum();
    if dx != 0 {
        return Pos { y: from.y, x: from.x + dx };
    }
    Pos { y: from.y + (target.y - from.y).signum(), x: from.x }
}
