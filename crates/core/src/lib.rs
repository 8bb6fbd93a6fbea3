pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod rules;
pub mod state;
pub mod types;

pub use game::{Game, MonsterView, PlayerView, WorldSnapshot};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{GeneratedFloor, derive_floor_seed, generate_floor, reachable};
pub use replay::*;
pub use rules::Rules;
pub use state::{GameState, Grid, Player};
pub use types::*;
