//! Difficulty model — a pure function of the current level.
//!
//! Every derived value is affine in `level` and `tier` and monotonic
//! non-decreasing in tier, so difficulty never drops across tiers and the
//! same level always yields the same multiplier set. No randomness here.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Derived difficulty values for one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub level: u32,
    /// Difficulty epoch: increments every boss interval.
    pub tier: u32,
    /// Multiplier applied to enemy bullet muzzle speeds.
    pub bullet_speed_mult: f64,
    /// Downward speed of ordinary enemy bullets.
    pub enemy_bullet_speed: f64,
    /// Shared horizontal speed of the formation grid.
    pub grid_speed: f64,
    /// Idle frames before the boss picks an attack.
    pub boss_idle_threshold: u32,
    /// Boss horizontal sway amplitude.
    pub boss_sway: f64,
    /// Per-frame chance an idle spider starts a dive.
    pub spider_drop_chance: f64,
    pub spider_dive_speed: f64,
    pub spider_return_speed: f64,
    /// Top speed homing bullets steer toward.
    pub homing_speed: f64,
    /// Initial horizontal speed of flyers.
    pub flyer_speed: f64,
}

impl Difficulty {
    /// Compute the full multiplier set for a level.
    pub fn for_level(level: u32) -> Self {
        let tier = tier_for_level(level);
        let t = tier as f64;
        let l = level as f64;

        Self {
            level,
            tier,
            bullet_speed_mult: 1.0 + t * BULLET_SPEED_PER_TIER,
            enemy_bullet_speed: ENEMY_BULLET_SPEED * (1.0 + t * BULLET_SPEED_PER_TIER),
            grid_speed: GRID_SPEED_BASE + l * GRID_SPEED_PER_LEVEL + t * GRID_SPEED_PER_TIER,
            boss_idle_threshold: (BOSS_IDLE_BASE.saturating_sub(tier * BOSS_IDLE_PER_TIER))
                .max(BOSS_IDLE_FLOOR),
            boss_sway: BOSS_SWAY_BASE + t,
            spider_drop_chance: SPIDER_DROP_CHANCE_BASE + t * SPIDER_DROP_CHANCE_PER_TIER,
            spider_dive_speed: SPIDER_DIVE_SPEED_BASE + t,
            spider_return_speed: SPIDER_RETURN_SPEED_BASE + t,
            homing_speed: HOMING_SPEED_BASE + t * HOMING_SPEED_PER_TIER,
            flyer_speed: FLYER_SPEED_BASE + t * FLYER_SPEED_PER_TIER,
        }
    }

    /// Per-frame ambient fire chance, given how many enemies are still
    /// alive. Shrinking waves shoot more to keep late-wave pressure up.
    pub fn ambient_fire_chance(&self, live_enemies: usize) -> f64 {
        let scarcity = 1.0 - (live_enemies as f64 / FULL_WAVE_SIZE);
        AMBIENT_FIRE_BASE
            + self.level as f64 * AMBIENT_FIRE_PER_LEVEL
            + self.tier as f64 * AMBIENT_FIRE_PER_TIER
            + AMBIENT_FIRE_SCARCITY_BONUS * scarcity
    }

    /// Number of flyers spawned alongside the grid at this level.
    pub fn flyer_count(&self) -> u32 {
        if self.level < FLYER_MIN_LEVEL {
            0
        } else {
            FLYER_MAX_COUNT.min(self.level.div_ceil(2))
        }
    }
}

/// Difficulty epoch for a level: 0 for the first boss interval, 1 for the
/// next, and so on.
pub fn tier_for_level(level: u32) -> u32 {
    level.saturating_sub(1) / BOSS_LEVEL_INTERVAL
}

/// Whether a level hosts a boss instead of a formation.
pub fn is_boss_level(level: u32) -> bool {
    level % BOSS_LEVEL_INTERVAL == 0
}
