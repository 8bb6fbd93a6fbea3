//! Session aggregate and the per-turn state machine.
//! Submodules extend `Game` with one concern each; all world mutation happens through them.

use slotmap::SlotMap;

use crate::journal::{InputJournal, InputPayload};
use crate::mapgen::Roller;
use crate::rules::Rules;
use crate::state::{GameState, Grid, Player};
use crate::types::*;

mod enemy_ai;
mod floor_transition;
mod progression;
mod snapshot;
mod turn;

#[cfg(test)]
mod test_support;

pub use snapshot::{MonsterView, PlayerView, WorldSnapshot};

const SESSION_STREAM: u64 = 0x5E55_1011_C0DE_0001;

pub struct Game {
    seed: u64,
    rules: Rules,
    roller: Roller,
    state: GameState,
    phase: ResolverPhase,
    pending_upgrades: u32,
    turn: u64,
    log: Vec<LogEvent>,
    message: Option<String>,
    journal: InputJournal,
    outcome: Option<RunOutcome>,
}

impl Game {
    pub fn new(seed: u64, rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;

        let player = Player {
            pos: rules.start,
            hp: rules.player_hp,
            max_hp: rules.player_hp,
            attack: rules.player_attack,
            xp: 0,
            next_xp: rules.first_level_xp,
            level: 1,
        };
        let state = GameState {
            grid: Grid::bordered(rules.width, rules.height),
            player,
            monsters: SlotMap::with_key(),
            chests: SlotMap::with_key(),
            depth: 1,
        };

        let mut game = Self {
            seed,
            roller: Roller::from_seed(seed ^ SESSION_STREAM),
            journal: InputJournal::new(seed, rules.clone()),
            rules,
            state,
            phase: ResolverPhase::Idle,
            pending_upgrades: 0,
            turn: 0,
            log: Vec::new(),
            message: None,
            outcome: None,
        };
        game.enter_floor(1);
        Ok(game)
    }

    /// Single entry point for the presentation layer.
    pub fn apply_intent(&mut self, intent: Intent) -> Result<TurnOutcome, GameError> {
        match intent {
            Intent::Move(direction) => Ok(self.apply_move(direction)),
            Intent::ChooseUpgrade(kind) => self.choose_upgrade(kind),
        }
    }

    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn depth(&self) -> u32 {
        self.state.depth
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    fn record(&mut self, event: LogEvent) {
        self.message = Some(event.message());
        self.log.push(event);
    }

    fn record_input(&mut self, payload: InputPayload) {
        self.journal.append(payload);
    }
}
