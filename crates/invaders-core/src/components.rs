//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Lifecycle flag — the sole lifecycle marker. Systems flag entities
/// inactive mid-frame; nothing is despawned until the cleanup system runs
/// at the frame boundary. Iterating systems must skip inactive entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Collision box size plus display color. The tint is cosmetic and never
/// consulted by gameplay rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
}

/// The player's ship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerShip {
    pub lives: u32,
    /// Frames until the next shot is allowed.
    pub cooldown: u32,
    pub shielded: bool,
    pub power_up: Option<PowerUpKind>,
    /// Frames remaining on the active power-up.
    pub power_up_timer: u32,
    /// Only meaningful while the laser power-up is equipped.
    pub charging: bool,
    pub charge_level: u32,
}

/// An enemy: grid member, flyer, or boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id, used by piercing bullets to record who they already hit.
    pub id: u32,
    pub kind: EnemyKind,
    /// Grid row index; -1 for non-grid kinds.
    pub row: i32,
    /// Score awarded on death.
    pub value: u32,
}

/// A projectile. `damage` is resolved to its default at construction, not
/// at every read site. `hit_ids` is only populated for piercing kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: Owner,
    pub kind: BulletKind,
    pub damage: f64,
    pub hit_ids: HashSet<u32>,
}

impl Bullet {
    pub fn new(owner: Owner, kind: BulletKind) -> Self {
        Self {
            owner,
            kind,
            damage: crate::constants::DEFAULT_BULLET_DAMAGE,
            hit_ids: HashSet::new(),
        }
    }

    pub fn with_damage(owner: Owner, kind: BulletKind, damage: f64) -> Self {
        Self {
            owner,
            kind,
            damage,
            hit_ids: HashSet::new(),
        }
    }
}

/// A falling power-up pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// A cosmetic spark or trail dot. Never collides, never scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Frames remaining.
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// Fade ratio in 0..=1, used by the renderer for alpha.
    pub fn life_ratio(&self) -> f64 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f64 / self.max_life as f64
        }
    }
}
