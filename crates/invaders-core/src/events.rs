//! Events emitted by the simulation for the presentation layer.
//!
//! Game events report state changes the host reacts to (HUD updates,
//! phase transitions, narration triggers). Audio events are fire-and-forget
//! cues — the engine names the sound, synthesis is external, and nothing
//! ever comes back.

use serde::{Deserialize, Serialize};

/// State-change events, each raised at most once per qualifying frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    LivesChanged { lives: u32 },
    /// The player took an un-shielded hit and survived. External narration
    /// rate-limits this; the engine applies no debouncing of its own.
    PlayerHit,
    LevelComplete,
    GameOver,
}

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Player fired a standard/multi/rapid shot.
    Shoot,
    /// An enemy or boss fired an ordinary bullet.
    EnemyShoot,
    /// Boss launched a homing bullet.
    HomingLaunch,
    /// Boss fired a sweep laser shot.
    LaserSweep,
    /// Something blew up.
    Explosion,
    /// Player picked up a non-shield power-up.
    PowerUpCollected,
    /// Player picked up the shield.
    ShieldActivate,
    /// A bullet connected with the boss (or popped the shield).
    BossHit,
    /// Periodic cue while the charge weapon winds up.
    ChargeTick { ratio: f64 },
    /// The charge weapon released its beam.
    LaserBlast { ratio: f64 },
}
