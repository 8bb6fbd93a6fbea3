//! Floor generation: random terrain, a connected exit, then spawns.

use crate::rules::Rules;
use crate::state::Grid;
use crate::types::{Pos, TileKind};

use super::model::GeneratedFloor;
use super::placement::EntityPlacer;
use super::reachability::reachable;
use super::seed::{Roller, derive_floor_seed};
use super::spawns::{SpawnContext, generate_chest_spawns, generate_monster_spawns};

pub struct LevelGenerator<'a> {
    run_seed: u64,
    rules: &'a Rules,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(run_seed: u64, rules: &'a Rules) -> Self {
        Self { run_seed, rules }
    }

    pub fn generate(&self, depth: u32) -> GeneratedFloor {
        let mut roller = Roller::from_seed(derive_floor_seed(self.run_seed, depth));
        let start = self.rules.start;

        let mut attempts = 0;
        let (mut grid, exit, connected) = loop {
            attempts += 1;
            let grid = self.roll_terrain(&mut roller);
            let placer = EntityPlacer {
                grid: &grid,
                start,
                max_attempts: self.rules.placement_attempts,
            };
            let exit = placer.place_random(&[], &mut roller);
            let connected = exit.is_some_and(|exit| reachable(&grid, start, exit));
            if connected || attempts >= self.rules.generation_attempts {
                break (grid, exit, connected);
            }
        };
        if let Some(exit) = exit {
            grid.set_tile(exit, TileKind::Exit);
        }

        let context = SpawnContext { depth, rules: self.rules, grid: &grid };
        let monster_spawns = generate_monster_spawns(&context, &mut roller);
        let chest_spawns = generate_chest_spawns(&context, &monster_spawns, &mut roller);

        GeneratedFloor {
            depth,
            grid,
            start,
            exit,
            attempts,
            connected,
            monster_spawns,
            chest_spawns,
        }
    }

    /// Walled border, independently sampled interior, start forced open.
    fn roll_terrain(&self, roller: &mut Roller) -> Grid {
        let mut grid = Grid::bordered(self.rules.width, self.rules.height);
        for y in 1..(grid.height - 1) {
            for x in 1..(grid.width - 1) {
                if roller.roll_percent(self.rules.wall_percent) {
                    grid.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Wall);
                }
            }
        }
        grid.set_tile(self.rules.start, TileKind::Floor);
        grid
    }
}
