//! Rejection sampling of free interior floor cells.

use crate::state::Grid;
use crate::types::{Pos, TileKind};

use super::seed::Roller;

pub struct EntityPlacer<'a> {
    pub grid: &'a Grid,
    /// Reserved for the player; never handed out.
    pub start: Pos,
    pub max_attempts: u32,
}

impl EntityPlacer<'_> {
    /// Samples interior cells until one is plain floor, not the start cell and not in
    /// `occupied`. Gives up with `None` after `max_attempts` samples.
    pub fn place_random(&self, occupied: &[Pos], roller: &mut Roller) -> Option<Pos> {
        let inner_width = self.grid.width.saturating_sub(2);
        let inner_height = self.grid.height.saturating_sub(2);
        if inner_width == 0 || inner_height == 0 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let candidate = Pos {
                y: (roller.roll_below(inner_height) + 1) as i32,
                x: (roller.roll_below(inner_width) + 1) as i32,
            };
            if self.grid.tile_at(candidate) == TileKind::Floor
                && candidate != self.start
                && !occupied.contains(&candidate)
            {
                return Some(candidate);
            }
        }
        None
    }
}
