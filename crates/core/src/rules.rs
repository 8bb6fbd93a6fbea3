//! Tunable constants for generation, combat, and progression.
//! Rule files may name any subset of fields; the rest keep their defaults.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, RulesError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub width: usize,
    pub height: usize,
    pub wall_percent: u32,
    pub generation_attempts: u32,
    pub placement_attempts: u32,
    pub start: Pos,

    pub player_hp: i32,
    pub player_attack: i32,
    pub first_level_xp: u32,
    /// `nextXp` multiplier in percent, floored after each level-up.
    pub xp_growth_percent: u32,

    pub base_monster_count: u32,
    pub monster_count_divisor: u32,
    pub monster_hp_per_depth: i32,
    pub chest_count_min: u32,
    pub chest_count_max: u32,

    pub chest_heal_percent: u32,
    pub chest_heal: i32,
    pub chest_trap_damage: i32,
    pub descent_heal: i32,
    pub attack_upgrade: i32,
    pub health_upgrade: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: 13,
            height: 13,
            wall_percent: 20,
            generation_attempts: 100,
            placement_attempts: 100,
            start: Pos { y: 1, x: 1 },
            player_hp: 100,
            player_attack: 10,
            first_level_xp: 50,
            xp_growth_percent: 150,
            base_monster_count: 2,
            monster_count_divisor: 2,
            monster_hp_per_depth: 2,
            chest_count_min: 1,
            chest_count_max: 2,
            chest_heal_percent: 70,
            chest_heal: 30,
            chest_trap_damage: 15,
            descent_heal: 20,
            attack_upgrade: 3,
            health_upgrade: 30,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.width < 3 || self.height < 3 {
            return Err(RulesError::GridTooSmall { width: self.width, height: self.height });
        }
        let interior_x = 1..(self.width as i32 - 1);
        let interior_y = 1..(self.height as i32 - 1);
        if !interior_x.contains(&self.start.x) || !interior_y.contains(&self.start.y) {
            return Err(RulesError::StartOutsideInterior(self.start));
        }
        for (field, value) in
            [("wall_percent", self.wall_percent), ("chest_heal_percent", self.chest_heal_percent)]
        {
            if value > 100 {
                return Err(RulesError::PercentOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("generation_attempts", self.generation_attempts),
            ("placement_attempts", self.placement_attempts),
        ] {
            if value == 0 {
                return Err(RulesError::ZeroAttempts { field });
            }
        }
        if self.monster_count_divisor == 0 {
            return Err(RulesError::ZeroMonsterCountDivisor);
        }
        if self.chest_count_min > self.chest_count_max {
            return Err(RulesError::ChestRangeInverted {
                min: self.chest_count_min,
                max: self.chest_count_max,
            });
        }
        if self.xp_growth_percent < 100 {
            return Err(RulesError::XpGrowthBelowOne(self.xp_growth_percent));
        }
        for (field, value) in
            [("player_hp", self.player_hp), ("player_attack", self.player_attack)]
        {
            if value <= 0 {
                return Err(RulesError::NonPositiveStat { field });
            }
        }
        if self.first_level_xp == 0 {
            return Err(RulesError::NonPositiveStat { field: "first_level_xp" });
        }
        // Zero keeps monster hp at its template base, which is always positive.
        for (field, value) in [
            ("monster_hp_per_depth", self.monster_hp_per_depth),
            ("chest_heal", self.chest_heal),
            ("chest_trap_damage", self.chest_trap_damage),
            ("descent_heal", self.descent_heal),
            ("attack_upgrade", self.attack_upgrade),
            ("health_upgrade", self.health_upgrade),
        ] {
            if value < 0 {
                return Err(RulesError::NegativeEffect { field, value });
            }
        }
        Ok(())
    }

    /// Xp threshold following `current`; always strictly larger.
    pub fn next_xp_after(&self, current: u32) -> u32 {
        let grown = (u64::from(current) * u64::from(self.xp_growth_percent) / 100) as u32;
        grown.max(current.saturating_add(1))
    }

    pub fn monster_count(&self, depth: u32) -> u32 {
        self.base_monster_count + depth / self.monster_count_divisor
    }
}
