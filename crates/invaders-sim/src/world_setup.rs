//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, wave formations, bullets, power-ups, and
//! particle bursts with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::*;
use invaders_core::constants::*;
use invaders_core::difficulty::{is_boss_level, tier_for_level, Difficulty};
use invaders_core::enums::*;
use invaders_core::types::{Position, Velocity};

/// Spawn the player ship centered on the bottom of the arena.
pub fn spawn_player(world: &mut World, width: f64, height: f64) -> hecs::Entity {
    world.spawn((
        PlayerShip {
            lives: PLAYER_LIVES,
            ..PlayerShip::default()
        },
        player_start_position(width, height),
        Body {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            tint: Tint::Player,
        },
        Active(true),
    ))
}

fn player_start_position(width: f64, height: f64) -> Position {
    Position {
        x: width / 2.0 - PLAYER_WIDTH / 2.0,
        y: height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
    }
}

/// Recenter the player without touching lives or power-up state.
/// Used between levels.
pub fn recenter_player(world: &mut World, width: f64, height: f64) {
    for (_, (pos, ship)) in world.query_mut::<(&mut Position, &mut PlayerShip)>() {
        *pos = player_start_position(width, height);
        ship.cooldown = 0;
        ship.charging = false;
        ship.charge_level = 0;
    }
}

/// Restore the player to fresh-run state: full lives, no power-up, centered.
pub fn reset_player(world: &mut World, width: f64, height: f64) {
    for (_, (ship, pos, active)) in
        world.query_mut::<(&mut PlayerShip, &mut Position, &mut Active)>()
    {
        *ship = PlayerShip {
            lives: PLAYER_LIVES,
            ..PlayerShip::default()
        };
        *pos = player_start_position(width, height);
        active.0 = true;
    }
}

/// Despawn every enemy, bullet, and power-up. The player and any lingering
/// particles survive.
pub fn clear_level_entities(world: &mut World) {
    let mut buffer: Vec<hecs::Entity> = Vec::new();
    buffer.extend(world.query::<&Enemy>().iter().map(|(e, _)| e));
    buffer.extend(world.query::<&Bullet>().iter().map(|(e, _)| e));
    buffer.extend(world.query::<&PowerUp>().iter().map(|(e, _)| e));
    for entity in buffer {
        let _ = world.despawn(entity);
    }
}

/// Despawn all particles. Used when starting a fresh run.
pub fn clear_particles(world: &mut World) {
    let buffer: Vec<hecs::Entity> = world.query::<&Particle>().iter().map(|(e, _)| e).collect();
    for entity in buffer {
        let _ = world.despawn(entity);
    }
}

/// Populate the world with the wave for `level`: either a single boss
/// (every third level) or the formation grid plus escort flyers.
pub fn start_level(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    level: u32,
    width: f64,
) {
    if is_boss_level(level) {
        spawn_boss(world, next_enemy_id, level, width);
    } else {
        spawn_grid(world, rng, next_enemy_id, level, width);
        let diff = Difficulty::for_level(level);
        if level >= FLYER_MIN_LEVEL {
            spawn_flyers(world, rng, next_enemy_id, &diff, width);
        }
    }
}

fn next_id(next_enemy_id: &mut u32) -> u32 {
    let id = *next_enemy_id;
    *next_enemy_id += 1;
    id
}

fn spawn_boss(world: &mut World, next_enemy_id: &mut u32, level: u32, width: f64) {
    let tier = tier_for_level(level);
    let variant = match tier % 3 {
        0 => BossVariant::Guardian,
        1 => BossVariant::Construct,
        _ => BossVariant::Eye,
    };
    let (bw, bh) = match variant {
        BossVariant::Guardian => (120.0, 80.0),
        BossVariant::Construct => (160.0, 100.0),
        BossVariant::Eye => (100.0, 100.0),
    };
    let health = level as f64 * BOSS_HEALTH_PER_LEVEL + tier as f64 * BOSS_HEALTH_PER_TIER;

    world.spawn((
        Enemy {
            id: next_id(next_enemy_id),
            kind: EnemyKind::Boss {
                variant,
                max_health: health,
                health,
                attack: BossAttack::Idle,
                attack_frame: 0,
            },
            row: -1,
            value: BOSS_VALUE_BASE * (tier + 1),
        },
        Position {
            x: width / 2.0 - bw / 2.0,
            y: BOSS_START_Y,
        },
        Body {
            width: bw,
            height: bh,
            tint: variant.tint(),
        },
        Active(true),
    ));
}

fn spawn_grid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    level: u32,
    width: f64,
) {
    let tier = tier_for_level(level);
    let start_x = (width - GRID_COLS as f64 * GRID_COL_PITCH) / 2.0;

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let x = start_x + col as f64 * GRID_COL_PITCH;
            let y = GRID_START_Y + row as f64 * GRID_ROW_PITCH;

            let (kind, value) = match row {
                0 => (EnemyKind::Octopus, OCTOPUS_VALUE),
                1 if level >= SPIDER_MIN_LEVEL && col % 2 == 0 => (
                    EnemyKind::Spider {
                        base_y: y,
                        state: SpiderState::Idle,
                        timer: rng.gen_range(0.0..SPIDER_INITIAL_TIMER_SPAN),
                    },
                    SPIDER_VALUE,
                ),
                1 => (EnemyKind::Crab, CRAB_VALUE),
                2 if level >= WORM_MIN_LEVEL => (EnemyKind::Worm { base_y: y }, WORM_VALUE),
                _ => (EnemyKind::Squid, SQUID_VALUE),
            };
            let tint = kind.tint();

            world.spawn((
                Enemy {
                    id: next_id(next_enemy_id),
                    kind,
                    row: row as i32,
                    value: value + tier * 5,
                },
                Position { x, y },
                Body {
                    width: ENEMY_WIDTH,
                    height: ENEMY_HEIGHT,
                    tint,
                },
                Active(true),
            ));
        }
    }
}

fn spawn_flyers(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    diff: &Difficulty,
    width: f64,
) {
    for _ in 0..diff.flyer_count() {
        let dx = if rng.gen_bool(0.5) {
            diff.flyer_speed
        } else {
            -diff.flyer_speed
        };
        world.spawn((
            Enemy {
                id: next_id(next_enemy_id),
                kind: EnemyKind::Flyer,
                row: -1,
                value: FLYER_VALUE + diff.tier * 5,
            },
            Position {
                x: rng.gen_range(0.0..width - GRID_COL_PITCH),
                y: FLYER_SPAWN_Y_MIN + rng.gen_range(0.0..FLYER_SPAWN_Y_SPAN),
            },
            Velocity { dx, dy: 1.0 },
            Body {
                width: FLYER_WIDTH,
                height: FLYER_HEIGHT,
                tint: Tint::Flyer,
            },
            Active(true),
        ));
    }
}

/// Spawn a single bullet entity. `x`/`y` are the top-left corner.
#[allow(clippy::too_many_arguments)]
pub fn spawn_bullet(
    world: &mut World,
    x: f64,
    y: f64,
    bullet_width: f64,
    bullet_height: f64,
    tint: Tint,
    owner: Owner,
    kind: BulletKind,
    vel: Velocity,
    damage: f64,
) -> hecs::Entity {
    world.spawn((
        Bullet::with_damage(owner, kind, damage),
        Position { x, y },
        vel,
        Body {
            width: bullet_width,
            height: bullet_height,
            tint,
        },
        Active(true),
    ))
}

/// Spawn a plain downward enemy shot centered on `x`.
pub fn spawn_enemy_shot(world: &mut World, x: f64, y: f64, speed: f64) {
    spawn_bullet(
        world,
        x - ENEMY_BULLET_WIDTH / 2.0,
        y,
        ENEMY_BULLET_WIDTH,
        ENEMY_BULLET_HEIGHT,
        Tint::EnemyBullet,
        Owner::Enemy,
        BulletKind::Standard,
        Velocity { dx: 0.0, dy: speed },
        DEFAULT_BULLET_DAMAGE,
    );
}

/// Roll the drop table at a destroyed enemy's position. Most kills drop
/// nothing; when the roll passes, the kind is drawn from fixed bands.
pub fn maybe_drop_power_up(world: &mut World, rng: &mut ChaCha8Rng, x: f64, y: f64) {
    if rng.gen::<f64>() >= POWERUP_DROP_RATE {
        return;
    }
    let roll = rng.gen::<f64>();
    let kind = if roll < POWERUP_BAND_MULTI {
        PowerUpKind::RapidFire
    } else if roll < POWERUP_BAND_SHIELD {
        PowerUpKind::MultiShot
    } else if roll < POWERUP_BAND_LASER {
        PowerUpKind::Shield
    } else {
        PowerUpKind::Laser
    };

    world.spawn((
        PowerUp { kind },
        Position {
            x: x - POWERUP_SIZE / 2.0,
            y,
        },
        Velocity {
            dx: 0.0,
            dy: POWERUP_FALL_SPEED,
        },
        Body {
            width: POWERUP_SIZE,
            height: POWERUP_SIZE,
            tint: kind.tint(),
        },
        Active(true),
    ));
}

/// Spawn a burst of short-lived particles radiating from a point.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    x: f64,
    y: f64,
    tint: Tint,
    count: u32,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = rng.gen_range(1.0..4.0);
        spawn_particle(
            world,
            x,
            y,
            Velocity {
                dx: angle.cos() * speed,
                dy: angle.sin() * speed,
            },
            tint,
            PARTICLE_LIFE,
            3.0,
        );
    }
}

/// Single exhaust puff left behind a flyer.
pub fn spawn_trail_particle(world: &mut World, rng: &mut ChaCha8Rng, x: f64, y: f64) {
    spawn_particle(
        world,
        x,
        y,
        Velocity {
            dx: rng.gen_range(-0.5..0.5),
            dy: 2.0 + rng.gen::<f64>(),
        },
        Tint::Flyer,
        FLYER_TRAIL_LIFE,
        2.0,
    );
}

fn spawn_particle(
    world: &mut World,
    x: f64,
    y: f64,
    vel: Velocity,
    tint: Tint,
    life: u32,
    size: f64,
) {
    world.spawn((
        Particle {
            life,
            max_life: life,
        },
        Position { x, y },
        vel,
        Body {
            width: size,
            height: size,
            tint,
        },
        Active(true),
    ));
}
