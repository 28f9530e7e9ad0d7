//! Boss attack automaton.
//!
//! A timer-driven state machine: `Idle` counts up to a tier-scaled
//! threshold, then one of four attacks is drawn by fixed probability
//! bands. Each attack self-terminates after a fixed number of
//! attack-frames and the counter resets to zero on every transition, so
//! no attack can fire outside its own state.

use rand::Rng;

use invaders_core::constants::*;
use invaders_core::enums::{BossAttack, BulletKind, Tint};
use invaders_core::events::AudioEvent;
use invaders_core::types::{Position, Velocity};

/// Input to the automaton for one frame.
pub struct BossContext {
    pub attack: BossAttack,
    /// Counter value before this frame's increment.
    pub attack_frame: u32,
    /// Idle frames before the next attack (shrinks with tier).
    pub idle_threshold: u32,
    /// Tier multiplier applied to muzzle speeds.
    pub bullet_speed_mult: f64,
    /// Tier-scaled downward speed of ordinary enemy bullets.
    pub enemy_bullet_speed: f64,
    /// Boss bottom-center, where shots originate.
    pub muzzle: Position,
    /// Boss top edge, used for the aimed-shot angle.
    pub boss_top: f64,
    pub player_center_x: f64,
    pub player_y: f64,
}

/// One bullet to spawn, fully specified.
#[derive(Debug, Clone)]
pub struct ShotSpec {
    pub kind: BulletKind,
    pub pos: Position,
    pub width: f64,
    pub height: f64,
    pub tint: Tint,
    pub vel: Velocity,
}

/// Output of one automaton step.
pub struct BossUpdate {
    pub attack: BossAttack,
    pub attack_frame: u32,
    pub shots: Vec<ShotSpec>,
    pub audio: Vec<AudioEvent>,
}

/// Advance the automaton by one frame.
pub fn advance<R: Rng>(ctx: &BossContext, rng: &mut R) -> BossUpdate {
    let frame = ctx.attack_frame + 1;
    let mut update = BossUpdate {
        attack: ctx.attack,
        attack_frame: frame,
        shots: Vec::new(),
        audio: Vec::new(),
    };

    match ctx.attack {
        BossAttack::Idle => {
            if frame > ctx.idle_threshold {
                update.attack = pick_attack(rng);
                update.attack_frame = 0;
            }
        }
        BossAttack::Spread => {
            if frame == 1 {
                update.audio.push(AudioEvent::EnemyShoot);
                for dx in [-2.0, 0.0, 2.0] {
                    update.shots.push(ShotSpec {
                        kind: BulletKind::Standard,
                        pos: ctx.muzzle,
                        width: 8.0,
                        height: 16.0,
                        tint: Tint::EnemyBullet,
                        vel: Velocity::new(dx, ctx.enemy_bullet_speed * BOSS_SPREAD_SPEED_FACTOR),
                    });
                }
            }
            if frame > BOSS_SPREAD_DURATION {
                update.attack = BossAttack::Idle;
                update.attack_frame = 0;
            }
        }
        BossAttack::Aimed => {
            if frame == 1 {
                update.audio.push(AudioEvent::EnemyShoot);
                let angle = (ctx.player_y - ctx.boss_top)
                    .atan2(ctx.player_center_x - ctx.muzzle.x);
                let speed = BOSS_SHOT_SPEED * ctx.bullet_speed_mult;
                update.shots.push(ShotSpec {
                    kind: BulletKind::Standard,
                    pos: ctx.muzzle,
                    width: 10.0,
                    height: 10.0,
                    tint: Tint::White,
                    vel: Velocity::new(angle.cos() * speed, angle.sin() * speed),
                });
            }
            if frame > BOSS_AIMED_DURATION {
                update.attack = BossAttack::Idle;
                update.attack_frame = 0;
            }
        }
        BossAttack::Homing => {
            if frame % BOSS_HOMING_INTERVAL == 0 && frame <= BOSS_HOMING_WINDOW {
                update.audio.push(AudioEvent::HomingLaunch);
                let jitter = rng.gen_range(-BOSS_HOMING_JITTER..BOSS_HOMING_JITTER);
                update.shots.push(ShotSpec {
                    kind: BulletKind::Homing,
                    pos: Position::new(ctx.muzzle.x + jitter, ctx.muzzle.y),
                    width: 12.0,
                    height: 12.0,
                    tint: Tint::EnemyHoming,
                    vel: Velocity::new(rng.gen_range(-2.0..2.0), BOSS_HOMING_DROP_SPEED),
                });
            }
            if frame > BOSS_HOMING_DURATION {
                update.attack = BossAttack::Idle;
                update.attack_frame = 0;
            }
        }
        BossAttack::Sweep => {
            if frame % BOSS_SWEEP_CADENCE == 0 && frame < BOSS_SWEEP_WINDOW {
                update.audio.push(AudioEvent::LaserSweep);
                // Launch angle sweeps linearly across a 120-degree arc.
                let arc = 2.0 * std::f64::consts::FRAC_PI_3;
                let angle = -std::f64::consts::FRAC_PI_3
                    + arc * (frame as f64 / BOSS_SWEEP_WINDOW as f64);
                let speed = BOSS_SHOT_SPEED * ctx.bullet_speed_mult;
                update.shots.push(ShotSpec {
                    kind: BulletKind::Laser,
                    pos: ctx.muzzle,
                    width: 6.0,
                    height: 20.0,
                    tint: Tint::EnemyLaser,
                    vel: Velocity::new(angle.sin() * speed, angle.cos() * speed),
                });
            }
            if frame > BOSS_SWEEP_DURATION {
                update.attack = BossAttack::Idle;
                update.attack_frame = 0;
            }
        }
    }

    update
}

/// Draw the next attack by fixed cumulative probability bands:
/// 30% spread, 20% aimed, 25% homing, 25% sweep.
fn pick_attack<R: Rng>(rng: &mut R) -> BossAttack {
    let r: f64 = rng.gen();
    if r < 0.3 {
        BossAttack::Spread
    } else if r < 0.5 {
        BossAttack::Aimed
    } else if r < 0.75 {
        BossAttack::Homing
    } else {
        BossAttack::Sweep
    }
}
