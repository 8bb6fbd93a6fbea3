use slotmap::SlotMap;

use crate::content::MonsterTemplate;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    /// Open floor enclosed by a one-cell wall border.
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut grid = Self::filled(width, height, TileKind::Floor);
        for y in 0..height {
            for x in 0..width {
                if grid.is_border(x, y) {
                    grid.tiles[y * width + x] = TileKind::Wall;
                }
            }
        }
        grid
    }

    /// Out-of-bounds cells read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos) != TileKind::Wall
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    pub fn exit(&self) -> Option<Pos> {
        self.tiles.iter().position(|tile| *tile == TileKind::Exit).map(|idx| Pos {
            y: (idx / self.width) as i32,
            x: (idx % self.width) as i32,
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub xp: u32,
    pub next_xp: u32,
    pub level: u32,
}

impl Player {
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Applies damage, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub xp_reward: u32,
}

impl Monster {
    /// Copies the template, then scales hp by depth.
    pub fn from_template(
        template: &MonsterTemplate,
        pos: Pos,
        depth: u32,
        hp_per_depth: i32,
    ) -> Self {
        let hp = template.base_hp + depth as i32 * hp_per_depth;
        Self {
            id: MonsterId::default(),
            kind: template.kind,
            pos,
            hp,
            max_hp: hp,
            attack: template.base_attack,
            xp_reward: template.xp_reward,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chest {
    pub id: ChestId,
    pub pos: Pos,
}

pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub monsters: SlotMap<MonsterId, Monster>,
    pub chests: SlotMap<ChestId, Chest>,
    pub depth: u32,
}

impl GameState {
    pub fn monster_at(&self, pos: Pos) -> Option<MonsterId> {
        self.monsters.iter().find(|(_, monster)| monster.pos == pos).map(|(id, _)| id)
    }

    pub fn chest_at(&self, pos: Pos) -> Option<ChestId> {
        self.chests.iter().find(|(_, chest)| chest.pos == pos).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::template_for;

    #[test]
    fn bordered_grid_walls_only_the_edge() {
        let grid = Grid::bordered(5, 4);
        assert_eq!(grid.tile_at(Pos { y: 0, x: 2 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 3, x: 2 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 0 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 4 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 1, x: 1 }), TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 3 }), TileKind::Floor);
    }

    #[test]
    fn out_of_bounds_reads_as_wall_and_writes_are_dropped() {
        let mut grid = Grid::bordered(4, 4);
        let outside = Pos { y: -1, x: 2 };
        grid.set_tile(outside, TileKind::Floor);
        assert_eq!(grid.tile_at(outside), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 9 }), TileKind::Wall);
    }

    #[test]
    fn exit_lookup_returns_committed_cell() {
        let mut grid = Grid::bordered(6, 6);
        assert_eq!(grid.exit(), None);
        grid.set_tile(Pos { y: 4, x: 3 }, TileKind::Exit);
        assert_eq!(grid.exit(), Some(Pos { y: 4, x: 3 }));
    }

    #[test]
    fn heal_caps_at_max_and_reports_restored_amount() {
        let mut player = Player {
            pos: Pos { y: 1, x: 1 },
            hp: 90,
            max_hp: 100,
            attack: 10,
            xp: 0,
            next_xp: 50,
            level: 1,
        };
        assert_eq!(player.heal(30), 10);
        assert_eq!(player.hp, 100);
        player.take_damage(40);
        assert!(!player.is_dead());
        assert_eq!(player.hp, 60);
        player.take_damage(500);
        assert!(player.is_dead());
        assert_eq!(player.hp, 0);
    }

    #[test]
    fn monster_hp_scales_linearly_with_depth() {
        let bat = Monster::from_template(template_for(MonsterKind::Bat), Pos { y: 2, x: 2 }, 4, 2);
        assert_eq!(bat.hp, 23);
        assert_eq!(bat.max_hp, 23);
        assert_eq!(bat.attack, 3);
        assert_eq!(bat.xp_reward, 5);
    }
}
