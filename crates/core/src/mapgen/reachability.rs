//! Breadth-first connectivity check over walkable cells.

use std::collections::VecDeque;

use crate::state::Grid;
use crate::types::{Direction, Pos};

/// True when `goal` can be reached from `start` through non-wall cells using
/// four-way steps.
pub fn reachable(grid: &Grid, start: Pos, goal: Pos) -> bool {
    if !grid.in_bounds(start) || !grid.is_walkable(start) {
        return false;
    }

    let mut visited = vec![false; grid.width * grid.height];
    let mut frontier = VecDeque::new();
    visited[cell_index(grid, start)] = true;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            return true;
        }
        for direction in Direction::ALL {
            let next = current.offset(direction);
            if !grid.in_bounds(next) || !grid.is_walkable(next) {
                continue;
            }
            let idx = cell_index(grid, next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            frontier.push_back(next);
        }
    }

    false
}

fn cell_index(grid: &Grid, pos: Pos) -> usize {
    (pos.y as usize) * grid.width + (pos.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    #[test]
    fn open_grid_connects_opposite_corners() {
        let grid = Grid::bordered(9, 7);
        assert!(reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 5, x: 7 }));
    }

    #[test]
    fn full_wall_column_separates_start_and_goal() {
        let mut grid = Grid::bordered(9, 7);
        for y in 0..7 {
            grid.set_tile(Pos { y, x: 4 }, TileKind::Wall);
        }
        assert!(!reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 5, x: 7 }));
    }

    #[test]
    fn diagonal_gap_does_not_connect() {
        let mut grid = Grid::bordered(5, 5);
        grid.set_tile(Pos { y: 1, x: 2 }, TileKind::Wall);
        grid.set_tile(Pos { y: 2, x: 1 }, TileKind::Wall);
        assert!(!reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 3, x: 3 }));
    }

    #[test]
    fn exit_tile_is_walkable_goal() {
        let mut grid = Grid::bordered(6, 3);
        grid.set_tile(Pos { y: 1, x: 4 }, TileKind::Exit);
        assert!(reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 4 }));
    }

    #[test]
    fn start_equal_to_goal_is_reachable() {
        let grid = Grid::bordered(4, 4);
        assert!(reachable(&grid, Pos { y: 2, x: 2 }, Pos { y: 2, x: 2 }));
    }

    #[test]
    fn wall_goal_is_never_reached() {
        let grid = Grid::bordered(5, 5);
        assert!(!reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 0, x: 0 }));
    }
}
