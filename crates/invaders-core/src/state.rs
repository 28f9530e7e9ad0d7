//! Game snapshot — the complete visible state handed to the host each frame.
//!
//! The snapshot is read-only derived data: the renderer draws it, the HUD
//! reads score/lives/level from it, and the event lists carry everything
//! that happened during the frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    /// State-change events raised this frame, at most one of each.
    pub events: Vec<GameEvent>,
    /// Fire-and-forget audio cues raised this frame.
    pub audio: Vec<AudioEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    pub shielded: bool,
    pub power_up: Option<PowerUpKind>,
    pub power_up_timer: u32,
    pub charging: bool,
    /// Charge ratio in 0..=1 for the wind-up visual.
    pub charge_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    pub owner: Owner,
    pub kind: BulletKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    /// Fade alpha in 0..=1.
    pub alpha: f64,
}
