use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use crawl_core::{
    Direction, Game, Intent, ResolverPhase, Rules, TileKind, TurnOutcome, UpgradeKind, reachable,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// TOML file overriding individual rule values
    #[arg(short, long)]
    rules: Option<String>,
    /// Write the recorded input journal as JSON for crawl-replay
    #[arg(long)]
    journal_out: Option<String>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn load_rules(path: Option<&str>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read rules file: {path}"))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse rules TOML: {path}"))
}

fn assert_invariants(game: &Game) {
    let state = game.state();
    let player = &state.player;
    assert!((0..=player.max_hp).contains(&player.hp), "Invariant failed: HP outside [0, Max HP]");
    assert!(state.grid.tile_at(player.pos) != TileKind::Wall, "Invariant failed: player inside wall");

    let mut occupied = HashSet::from([player.pos]);
    for pos in state.monsters.values().map(|m| m.pos).chain(state.chests.values().map(|c| c.pos)) {
        assert_eq!(state.grid.tile_at(pos), TileKind::Floor, "Invariant failed: entity off floor");
        assert!(occupied.insert(pos), "Invariant failed: two entities share {pos:?}");
    }

    if let Some(exit) = state.grid.exit() {
        assert!(reachable(&state.grid, player.pos, exit), "Invariant failed: exit unreachable");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rules = load_rules(args.rules.as_deref())?;

    println!("Starting Fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut game = Game::new(args.seed, rules).context("Rules rejected")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.turns {
        let intent = match game.phase() {
            ResolverPhase::Terminated => break,
            ResolverPhase::Paused { .. } => {
                Intent::ChooseUpgrade(choose(&mut rng, &[UpgradeKind::Attack, UpgradeKind::Health]))
            }
            ResolverPhase::Idle => Intent::Move(choose(&mut rng, &Direction::ALL)),
        };

        let outcome = game.apply_intent(intent).context("fuzz applied invalid intent")?;
        if let TurnOutcome::Finished(outcome) = outcome {
            println!("Finished with outcome {:?} after {} turns", outcome, game.turn());
        }
        assert_invariants(&game);
    }

    println!(
        "Reached depth {} at turn {}, snapshot hash {}",
        game.depth(),
        game.turn(),
        game.snapshot_hash()
    );

    if let Some(path) = &args.journal_out {
        let json = serde_json::to_string_pretty(game.journal())?;
        fs::write(path, json).with_context(|| format!("Failed to write journal: {path}"))?;
        println!("Journal written to {path}");
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
