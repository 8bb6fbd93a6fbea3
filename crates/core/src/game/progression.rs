//! Experience, level-ups, and the upgrade pause.

use super::*;

impl Game {
    /// Every threshold crossed raises the level once and queues one upgrade choice.
    /// Leftover xp carries into the next level.
    pub(super) fn gain_xp(&mut self, amount: u32) {
        self.state.player.xp += amount;
        while self.state.player.xp >= self.state.player.next_xp {
            let player = &mut self.state.player;
            player.xp -= player.next_xp;
            player.level += 1;
            player.next_xp = self.rules.next_xp_after(player.next_xp);
            let level = player.level;
            self.pending_upgrades += 1;
            self.record(LogEvent::LeveledUp { level });
        }
    }

    /// Applies one queued upgrade. The resolver stays paused while more are queued.
    pub fn choose_upgrade(&mut self, kind: UpgradeKind) -> Result<TurnOutcome, GameError> {
        if !matches!(self.phase, ResolverPhase::Paused { .. }) || self.pending_upgrades == 0 {
            return Err(GameError::NoUpgradePending);
        }

        self.record_input(InputPayload::ChooseUpgrade(kind));
        let player = &mut self.state.player;
        match kind {
            UpgradeKind::Attack => player.attack += self.rules.attack_upgrade,
            UpgradeKind::Health => {
                player.max_hp += self.rules.health_upgrade;
                player.hp += self.rules.health_upgrade;
            }
        }
        self.record(LogEvent::UpgradeChosen { kind });

        self.pending_upgrades -= 1;
        if self.pending_upgrades > 0 {
            self.phase = ResolverPhase::Paused { pending_upgrades: self.pending_upgrades };
            return Ok(TurnOutcome::AwaitingUpgrade { pending: self.pending_upgrades });
        }
        self.phase = ResolverPhase::Idle;
        Ok(TurnOutcome::Completed)
    }
}
