//! Player move resolution: melee, looting, descent, plain steps, and turn closing.

use super::*;

impl Game {
    /// Resolves one full turn. Wall bumps and moves while paused or terminated are
    /// rejected without touching any state.
    pub fn apply_move(&mut self, direction: Direction) -> TurnOutcome {
        if self.phase != ResolverPhase::Idle {
            return TurnOutcome::Ignored;
        }
        let target = self.state.player.pos.offset(direction);
        let tile = self.state.grid.tile_at(target);
        if tile == TileKind::Wall {
            return TurnOutcome::Ignored;
        }

        self.record_input(InputPayload::Move(direction));
        self.turn += 1;

        if let Some(monster_id) = self.state.monster_at(target) {
            self.strike_monster(monster_id);
            self.run_monster_phase();
        } else if let Some(chest_id) = self.state.chest_at(target) {
            // Looting ends the turn; monsters do not act.
            self.open_chest(chest_id);
        } else if tile == TileKind::Exit {
            return self.descend();
        } else {
            self.state.player.pos = target;
            self.run_monster_phase();
        }

        self.close_turn()
    }

    fn strike_monster(&mut self, monster_id: MonsterId) {
        let damage = self.state.player.attack;
        let Some(monster) = self.state.monsters.get_mut(monster_id) else {
            return;
        };
        monster.hp -= damage;
        let (kind, remaining_hp, xp) = (monster.kind, monster.hp, monster.xp_reward);

        if remaining_hp > 0 {
            self.record(LogEvent::PlayerAttacked { monster: kind, damage, remaining_hp });
            return;
        }
        self.state.monsters.remove(monster_id);
        self.record(LogEvent::MonsterDefeated { monster: kind, xp });
        self.gain_xp(xp);
    }

    fn open_chest(&mut self, chest_id: ChestId) {
        if self.roller.roll_percent(self.rules.chest_heal_percent) {
            let amount = self.state.player.heal(self.rules.chest_heal);
            self.record(LogEvent::ChestHealed { amount });
        } else {
            let damage = self.rules.chest_trap_damage;
            self.state.player.take_damage(damage);
            self.record(LogEvent::ChestTrapped { damage });
        }
        self.state.chests.remove(chest_id);
    }

    fn descend(&mut self) -> TurnOutcome {
        let depth = self.state.depth + 1;
        let healed = self.state.player.heal(self.rules.descent_heal);
        self.enter_floor(depth);
        self.record(LogEvent::Descended { depth, healed });
        TurnOutcome::Descended { depth }
    }

    /// Death wins over a pending level-up; otherwise queued upgrades pause the resolver.
    fn close_turn(&mut self) -> TurnOutcome {
        if self.state.player.is_dead() {
            return self.terminate();
        }
        if self.pending_upgrades > 0 {
            self.phase = ResolverPhase::Paused { pending_upgrades: self.pending_upgrades };
            return TurnOutcome::AwaitingUpgrade { pending: self.pending_upgrades };
        }
        TurnOutcome::Completed
    }

    fn terminate(&mut self) -> TurnOutcome {
        self.state.player.hp = 0;
        let outcome = RunOutcome::Defeated { depth: self.state.depth };
        self.phase = ResolverPhase::Terminated;
        self.pending_upgrades = 0;
        self.outcome = Some(outcome);
        self.record(LogEvent::PlayerDied { depth: self.state.depth });
        TurnOutcome::Finished(outcome)
    }
}
