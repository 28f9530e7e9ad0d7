//! Formation grid system: lock-step horizontal march, edge flip and drop,
//! kind-specific vertical motion, and ambient enemy fire.
//!
//! Worms and spiders anchor their vertical motion to `base_y`, which is
//! what the edge drop moves for them. A spider mid-dive keeps its current
//! depth and inherits the drop when it next touches the rest line.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::{Active, Body, Enemy, PlayerShip};
use invaders_core::constants::*;
use invaders_core::difficulty::Difficulty;
use invaders_core::enums::EnemyKind;
use invaders_core::events::AudioEvent;
use invaders_core::types::Position;

use invaders_ai::spider::{self, SpiderContext};

use crate::world_setup;

/// March the grid one frame. `direction` is the shared horizontal sign,
/// flipped here when any member touches an arena edge.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    diff: &Difficulty,
    direction: &mut f64,
    width: f64,
    audio: &mut Vec<AudioEvent>,
) {
    let speed = diff.grid_speed * *direction;
    let mut hit_edge = false;
    let mut spider_shots: Vec<(f64, f64)> = Vec::new();

    for (_, (enemy, pos, body, active)) in
        world.query_mut::<(&mut Enemy, &mut Position, &Body, &Active)>()
    {
        if !active.0 {
            continue;
        }
        match &mut enemy.kind {
            EnemyKind::Flyer | EnemyKind::Boss { .. } => continue,
            kind => {
                pos.x += speed;
                match kind {
                    EnemyKind::Worm { base_y } => {
                        pos.y = *base_y
                            + (pos.x / WORM_WIGGLE_WAVELENGTH).sin() * WORM_WIGGLE_AMPLITUDE;
                    }
                    EnemyKind::Spider {
                        base_y,
                        state,
                        timer,
                    } => {
                        let update = spider::advance(
                            &SpiderContext {
                                state: *state,
                                timer: *timer,
                                y: pos.y,
                                base_y: *base_y,
                                drop_chance: diff.spider_drop_chance,
                                dive_speed: diff.spider_dive_speed,
                                return_speed: diff.spider_return_speed,
                            },
                            rng,
                        );
                        *state = update.state;
                        *timer = update.timer;
                        pos.y = update.y;
                        if update.fires {
                            spider_shots.push((pos.x + body.width / 2.0, pos.y + body.height));
                        }
                    }
                    _ => {}
                }
                if pos.x <= 0.0 || pos.x + body.width >= width {
                    hit_edge = true;
                }
            }
        }
    }

    if hit_edge {
        *direction = -*direction;
        for (_, (enemy, pos, active)) in world.query_mut::<(&mut Enemy, &mut Position, &Active)>() {
            if !active.0 {
                continue;
            }
            match &mut enemy.kind {
                EnemyKind::Flyer | EnemyKind::Boss { .. } => {}
                EnemyKind::Worm { base_y } | EnemyKind::Spider { base_y, .. } => {
                    *base_y += ENEMY_DROP_DISTANCE;
                }
                _ => pos.y += ENEMY_DROP_DISTANCE,
            }
        }
    }

    for (x, y) in spider_shots {
        audio.push(AudioEvent::EnemyShoot);
        world_setup::spawn_enemy_shot(world, x, y, diff.enemy_bullet_speed);
    }
}

/// Roll the per-frame ambient fire chance and, on success, fire one shot
/// from a randomly chosen non-spider enemy. Spiders only shoot through
/// their dive cycle.
pub fn ambient_fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    diff: &Difficulty,
    audio: &mut Vec<AudioEvent>,
) {
    let mut live = 0usize;
    let mut shooters: Vec<(f64, f64)> = Vec::new();
    for (_, (enemy, pos, body, active)) in
        world.query::<(&Enemy, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        live += 1;
        if !matches!(enemy.kind, EnemyKind::Spider { .. } | EnemyKind::Boss { .. }) {
            shooters.push((pos.x + body.width / 2.0, pos.y + body.height));
        }
    }
    if shooters.is_empty() {
        return;
    }

    let chance = diff.ambient_fire_chance(live).clamp(0.0, 1.0);
    if !rng.gen_bool(chance) {
        return;
    }

    let (x, y) = shooters[rng.gen_range(0..shooters.len())];
    audio.push(AudioEvent::EnemyShoot);
    world_setup::spawn_enemy_shot(world, x, y, diff.enemy_bullet_speed);
}

/// True when the wave has descended to the player's line: grid members
/// count with their bottom edge, flyers with their top.
pub fn breached(world: &World) -> bool {
    let mut player_top: Option<f64> = None;
    for (_, (_, pos, active)) in world.query::<(&PlayerShip, &Position, &Active)>().iter() {
        if active.0 && pos.y > 0.0 {
            player_top = Some(pos.y);
        }
    }
    let Some(line) = player_top else {
        return false;
    };

    for (_, (enemy, pos, body, active)) in
        world.query::<(&Enemy, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        let edge = match enemy.kind {
            EnemyKind::Boss { .. } => continue,
            EnemyKind::Flyer => pos.y,
            _ => pos.y + body.height,
        };
        if edge >= line {
            return true;
        }
    }
    false
}
