//! Player commands and per-frame input sent from the host to the engine.
//!
//! Commands are queued and processed at the next frame boundary. Input is
//! sampled every frame and abstracted away from physical key codes.

use serde::{Deserialize, Serialize};

/// The set of held inputs for one frame. Conflicting directions are both
/// applied in sequence (net cancellation), never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// All possible host-driven actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh run: lives, score, and level reset, level 1 wave spawned.
    StartRun,
    /// Regenerate the wave for the given level and resume play.
    StartLevel { level: u32 },
    /// Freeze the simulation. Rendering the last snapshot is still fine.
    Pause,
    /// Continue from exactly where the pause left off.
    Resume,
    /// Back to the menu; world state is kept until the next StartRun.
    ReturnToMenu,
}
