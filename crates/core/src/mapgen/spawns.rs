//! Depth-scaled monster and chest spawn selection.

use crate::content::eligible_templates;
use crate::rules::Rules;
use crate::state::Grid;
use crate::types::Pos;

use super::model::MonsterSpawn;
use super::placement::EntityPlacer;
use super::seed::Roller;

pub(super) struct SpawnContext<'a> {
    pub(super) depth: u32,
    pub(super) rules: &'a Rules,
    pub(super) grid: &'a Grid,
}

impl SpawnContext<'_> {
    fn placer(&self) -> EntityPlacer<'_> {
        EntityPlacer {
            grid: self.grid,
            start: self.rules.start,
            max_attempts: self.rules.placement_attempts,
        }
    }
}

/// Monsters that could not be placed are dropped, so the result may be short.
pub(super) fn generate_monster_spawns(
    context: &SpawnContext<'_>,
    roller: &mut Roller,
) -> Vec<MonsterSpawn> {
    let templates = eligible_templates(context.depth);
    if templates.is_empty() {
        return Vec::new();
    }

    let placer = context.placer();
    let target = context.rules.monster_count(context.depth);
    let mut occupied = Vec::with_capacity(target as usize);
    let mut spawns = Vec::with_capacity(target as usize);
    for _ in 0..target {
        let Some(pos) = placer.place_random(&occupied, roller) else {
            continue;
        };
        let template = templates[roller.roll_below(templates.len())];
        occupied.push(pos);
        spawns.push(MonsterSpawn { kind: template.kind, pos });
    }
    spawns
}

pub(super) fn generate_chest_spawns(
    context: &SpawnContext<'_>,
    monster_spawns: &[MonsterSpawn],
    roller: &mut Roller,
) -> Vec<Pos> {
    let placer = context.placer();
    let target = roller.roll_range(context.rules.chest_count_min, context.rules.chest_count_max);
    let mut occupied: Vec<Pos> = monster_spawns.iter().map(|spawn| spawn.pos).collect();
    let mut chests = Vec::with_capacity(target as usize);
    for _ in 0..target {
        if let Some(pos) = placer.place_random(&occupied, roller) {
            occupied.push(pos);
            chests.push(pos);
        }
    }
    chests
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::types::{MonsterKind, TileKind};

    fn open_grid() -> Grid {
        let mut grid = Grid::bordered(13, 13);
        grid.set_tile(Pos { y: 11, x: 11 }, TileKind::Exit);
        grid
    }

    #[test]
    fn monster_count_follows_depth() {
        let grid = open_grid();
        let rules = Rules::default();
        for (depth, expected) in [(1, 2), (2, 3), (3, 3), (4, 4), (9, 6)] {
            let context = SpawnContext { depth, rules: &rules, grid: &grid };
            let spawns = generate_monster_spawns(&context, &mut Roller::from_seed(depth.into()));
            assert_eq!(spawns.len(), expected, "depth {depth}");
        }
    }

    #[test]
    fn shallow_floors_only_spawn_unlocked_kinds() {
        let grid = open_grid();
        let rules = Rules::default();
        let mut roller = Roller::from_seed(3);
        for depth in 1..=2 {
            let context = SpawnContext { depth, rules: &rules, grid: &grid };
            for _ in 0..20 {
                for spawn in generate_monster_spawns(&context, &mut roller) {
                    assert_eq!(spawn.kind, MonsterKind::Bat);
                }
            }
        }
    }

    #[test]
    fn deep_floors_draw_from_every_tier() {
        let grid = open_grid();
        let rules = Rules::default();
        let context = SpawnContext { depth: 6, rules: &rules, grid: &grid };
        let mut roller = Roller::from_seed(21);
        let mut kinds = BTreeSet::new();
        for _ in 0..30 {
            kinds.extend(generate_monster_spawns(&context, &mut roller).iter().map(|s| s.kind));
        }
        assert_eq!(kinds.len(), 3, "expected all tiers, got {kinds:?}");
    }

    #[test]
    fn chests_stay_in_range_and_off_monsters() {
        let grid = open_grid();
        let rules = Rules::default();
        let context = SpawnContext { depth: 4, rules: &rules, grid: &grid };
        let mut roller = Roller::from_seed(8);
        for _ in 0..50 {
            let monsters = generate_monster_spawns(&context, &mut roller);
            let chests = generate_chest_spawns(&context, &monsters, &mut roller);
            assert!((1..=2).contains(&chests.len()));
            for chest in &chests {
                assert!(monsters.iter().all(|monster| monster.pos != *chest));
                assert_ne!(*chest, rules.start);
                assert_eq!(grid.tile_at(*chest), TileKind::Floor);
            }
        }
    }

    #[test]
    fn crowded_grid_spawns_fewer_monsters_than_requested() {
        let mut grid = Grid::filled(5, 5, TileKind::Wall);
        grid.set_tile(Pos { y: 1, x: 1 }, TileKind::Floor);
        grid.set_tile(Pos { y: 1, x: 2 }, TileKind::Floor);
        let rules = Rules::default();
        let context = SpawnContext { depth: 8, rules: &rules, grid: &grid };

        let spawns = generate_monster_spawns(&context, &mut Roller::from_seed(1));
        assert_eq!(spawns.len(), 1);
        assert_eq!(spawns[0].pos, Pos { y: 1, x: 2 });
    }
}
