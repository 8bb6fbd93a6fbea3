//! Procedural floor generation split into coherent submodules.

pub mod model;
pub mod placement;
pub mod reachability;
pub mod seed;

mod generator;
mod spawns;

pub use generator::LevelGenerator;
pub use model::{GeneratedFloor, MonsterSpawn};
pub use placement::EntityPlacer;
pub use reachability::reachable;
pub use seed::{Roller, derive_floor_seed};

use crate::rules::Rules;

pub fn generate_floor(run_seed: u64, depth: u32, rules: &Rules) -> GeneratedFloor {
    LevelGenerator::new(run_seed, rules).generate(depth)
}
