//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). The engine only advances the world while
/// `Playing`; every other phase freezes the world in place so a resume
/// continues exactly where it left off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    /// Level cleared, waiting for the host to start the next one.
    Victory,
}

/// Who fired a bullet. Player bullets only hit enemies, enemy bullets only
/// hit the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Bullet flavor. Steering and collision semantics key off this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletKind {
    #[default]
    Standard,
    /// Enemy-owned, steers toward the player until it passes them.
    Homing,
    /// Boss sweep shot, travels at a fixed launch angle.
    Laser,
    /// Player charge weapon beam. Pierces: damages each enemy once and
    /// keeps flying.
    ChargedBeam,
}

/// Power-up pickups dropped by dying enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    RapidFire,
    MultiShot,
    Shield,
    Laser,
}

impl PowerUpKind {
    pub fn tint(self) -> Tint {
        match self {
            PowerUpKind::RapidFire => Tint::PowerUpRapid,
            PowerUpKind::MultiShot => Tint::PowerUpMulti,
            PowerUpKind::Shield => Tint::PowerUpShield,
            PowerUpKind::Laser => Tint::PowerUpLaser,
        }
    }
}

/// Spider dive cycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiderState {
    /// Pinned to the formation rest line, counting down to a dive roll.
    #[default]
    Idle,
    /// Descending toward the player.
    Attacking,
    /// Climbing back to the rest line.
    Returning,
}

/// Boss attack automaton state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossAttack {
    /// Counting up toward the next attack.
    #[default]
    Idle,
    /// Three diverging bullets fired at once.
    Spread,
    /// One bullet aimed at the player's current center.
    Aimed,
    /// A salvo of steering bullets launched over an initial window.
    Homing,
    /// A rapid cadence of laser shots sweeping across an arc.
    Sweep,
}

/// Boss cosmetic variant, cycling with the difficulty tier. The attack
/// repertoire is identical across variants; only size and shape differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossVariant {
    #[default]
    Guardian,
    Construct,
    Eye,
}

impl BossVariant {
    pub fn tint(self) -> Tint {
        match self {
            BossVariant::Guardian => Tint::BossGuardian,
            BossVariant::Construct => Tint::BossConstruct,
            BossVariant::Eye => Tint::BossEye,
        }
    }
}

/// Enemy kind with kind-specific state. Grid kinds share the formation's
/// lock-step motion; Worm and Spider layer their own vertical motion on top
/// of it, anchored to `base_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    Squid,
    Crab,
    Octopus,
    Worm {
        base_y: f64,
    },
    Spider {
        base_y: f64,
        state: SpiderState,
        timer: f64,
    },
    /// Independently moving, not part of the grid.
    Flyer,
    Boss {
        variant: BossVariant,
        max_health: f64,
        health: f64,
        attack: BossAttack,
        attack_frame: u32,
    },
}

impl EnemyKind {
    pub fn is_boss(&self) -> bool {
        matches!(self, EnemyKind::Boss { .. })
    }

    pub fn is_flyer(&self) -> bool {
        matches!(self, EnemyKind::Flyer)
    }

    pub fn tint(&self) -> Tint {
        match self {
            EnemyKind::Squid => Tint::Squid,
            EnemyKind::Crab => Tint::Crab,
            EnemyKind::Octopus => Tint::Octopus,
            EnemyKind::Worm { .. } => Tint::Worm,
            EnemyKind::Spider { .. } => Tint::Spider,
            EnemyKind::Flyer => Tint::Flyer,
            EnemyKind::Boss { variant, .. } => variant.tint(),
        }
    }
}

/// Display color for an entity. Cosmetic only — never consulted by any
/// gameplay rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Player,
    PlayerShield,
    PlayerBullet,
    Squid,
    Crab,
    Octopus,
    Spider,
    Worm,
    Flyer,
    BossGuardian,
    BossConstruct,
    BossEye,
    EnemyBullet,
    EnemyHoming,
    EnemyLaser,
    PowerUpRapid,
    PowerUpShield,
    PowerUpMulti,
    PowerUpLaser,
    BeamCore,
    BeamGlow,
    White,
}

impl Tint {
    /// CSS hex color for the renderer.
    pub fn hex(self) -> &'static str {
        match self {
            Tint::Player => "#22d3ee",
            Tint::PlayerShield => "#3b82f6",
            Tint::PlayerBullet => "#67e8f9",
            Tint::Squid => "#f472b6",
            Tint::Crab => "#a78bfa",
            Tint::Octopus => "#34d399",
            Tint::Spider => "#818cf8",
            Tint::Worm => "#fbbf24",
            Tint::Flyer => "#a3e635",
            Tint::BossGuardian => "#db2777",
            Tint::BossConstruct => "#d97706",
            Tint::BossEye => "#dc2626",
            Tint::EnemyBullet => "#f87171",
            Tint::EnemyHoming => "#f97316",
            Tint::EnemyLaser => "#e11d48",
            Tint::PowerUpRapid => "#facc15",
            Tint::PowerUpShield => "#60a5fa",
            Tint::PowerUpMulti => "#c084fc",
            Tint::PowerUpLaser => "#fb7185",
            Tint::BeamCore => "#ffffff",
            Tint::BeamGlow => "#f43f5e",
            Tint::White => "#ffffff",
        }
    }
}
