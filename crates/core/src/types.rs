use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::content::template_for;

new_key_type! {
    pub struct MonsterId;
    pub struct ChestId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step as `(dx, dy)`; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    Attack,
    Health,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    ChooseUpgrade(UpgradeKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Bat,
    Ghost,
    Ogre,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverPhase {
    Idle,
    Paused { pending_upgrades: u32 },
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Defeated { depth: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The intent was rejected; nothing changed.
    Ignored,
    Completed,
    AwaitingUpgrade { pending: u32 },
    Descended { depth: u32 },
    Finished(RunOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    FloorEntered { depth: u32, attempts: u32, connected: bool },
    PlayerAttacked { monster: MonsterKind, damage: i32, remaining_hp: i32 },
    MonsterDefeated { monster: MonsterKind, xp: u32 },
    MonsterAttacked { monster: MonsterKind, damage: i32 },
    ChestHealed { amount: i32 },
    ChestTrapped { damage: i32 },
    Descended { depth: u32, healed: i32 },
    LeveledUp { level: u32 },
    UpgradeChosen { kind: UpgradeKind },
    PlayerDied { depth: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesError {
    GridTooSmall { width: usize, height: usize },
    StartOutsideInterior(Pos),
    PercentOutOfRange { field: &'static str, value: u32 },
    ZeroAttempts { field: &'static str },
    ZeroMonsterCountDivisor,
    ChestRangeInverted { min: u32, max: u32 },
    XpGrowthBelowOne(u32),
    NonPositiveStat { field: &'static str },
    NegativeEffect { field: &'static str, value: i32 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { width, height } => {
                write!(f, "grid {width}x{height} is smaller than 3x3")
            }
            Self::StartOutsideInterior(pos) => {
                write!(f, "start cell ({}, {}) is not an interior cell", pos.x, pos.y)
            }
            Self::PercentOutOfRange { field, value } => {
                write!(f, "{field} must be at most 100, got {value}")
            }
            Self::ZeroAttempts { field } => write!(f, "{field} must be at least 1"),
            Self::ZeroMonsterCountDivisor => write!(f, "monster_count_divisor must be at least 1"),
            Self::ChestRangeInverted { min, max } => {
                write!(f, "chest_count_min ({min}) exceeds chest_count_max ({max})")
            }
            Self::XpGrowthBelowOne(value) => {
                write!(f, "xp_growth_percent must be at least 100, got {value}")
            }
            Self::NonPositiveStat { field } => write!(f, "{field} must be positive"),
            Self::NegativeEffect { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
        }
    }
}

impl Error for RulesError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidRules(RulesError),
    NoUpgradePending,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRules(err) => write!(f, "invalid rules: {err}"),
            Self::NoUpgradePending => write!(f, "no upgrade choice is pending"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRules(err) => Some(err),
            Self::NoUpgradePending => None,
        }
    }
}

impl From<RulesError> for GameError {
    fn from(err: RulesError) -> Self {
        Self::InvalidRules(err)
    }
}

impl LogEvent {
    /// Status-line text for the event.
    pub fn message(&self) -> String {
        match self {
            Self::FloorEntered { depth, attempts, .. } => {
                format!("floor {depth} (generated in {attempts} attempts)")
            }
            Self::PlayerAttacked { monster, damage, .. } => {
                format!("hit {} for {damage}", template_for(*monster).name)
            }
            Self::MonsterDefeated { monster, xp } => {
                format!("defeated {}: XP +{xp}", template_for(*monster).name)
            }
            Self::MonsterAttacked { monster, damage } => {
                format!("{} attacks: HP -{damage}", template_for(*monster).name)
            }
            Self::ChestHealed { amount } => format!("found a potion: HP +{amount}"),
            Self::ChestTrapped { damage } => format!("the chest was trapped: HP -{damage}"),
            Self::Descended { healed, .. } => format!("descended: HP +{healed}"),
            Self::LeveledUp { level } => format!("reached level {level}: choose an upgrade"),
            Self::UpgradeChosen { kind: UpgradeKind::Attack } => "power surges: ATK up".to_string(),
            Self::UpgradeChosen { kind: UpgradeKind::Health } => "vitality swells: HP up".to_string(),
            Self::PlayerDied { depth } => format!("game over on floor {depth}"),
        }
    }
}
