use serde::{Deserialize, Serialize};

use crate::rules::Rules;
use crate::types::{Direction, Intent, UpgradeKind};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every accepted intent of a session, in order, plus what is needed to rebuild it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub rules: Rules,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move(Direction),
    ChooseUpgrade(UpgradeKind),
}

impl InputPayload {
    pub fn intent(self) -> Intent {
        match self {
            Self::Move(direction) => Intent::Move(direction),
            Self::ChooseUpgrade(kind) => Intent::ChooseUpgrade(kind),
        }
    }
}

impl InputJournal {
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, rules, inputs: Vec::new() }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_numbers_records_in_order() {
        let mut journal = InputJournal::new(5, Rules::default());
        journal.append(InputPayload::Move(Direction::Left));
        journal.append(InputPayload::ChooseUpgrade(UpgradeKind::Health));

        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(journal.inputs[1].payload.intent(), Intent::ChooseUpgrade(UpgradeKind::Health));
    }

    #[test]
    fn journal_json_keeps_rules_and_inputs() {
        let mut rules = Rules::default();
        rules.wall_percent = 35;
        let mut journal = InputJournal::new(11, rules);
        journal.append(InputPayload::Move(Direction::Down));

        let json = serde_json::to_string(&journal).expect("serialize journal");
        let parsed: InputJournal = serde_json::from_str(&json).expect("parse journal");
        assert_eq!(parsed, journal);
        assert_eq!(parsed.rules.wall_percent, 35);
    }
}
