//! Boss system: horizontal sway plus the attack automaton.
//!
//! The automaton itself lives in `invaders_ai::boss` as a pure function;
//! this system feeds it the boss's current state and spawns whatever
//! shots it returns.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::{Active, Body, Enemy, PlayerShip};
use invaders_core::constants::*;
use invaders_core::difficulty::Difficulty;
use invaders_core::enums::{EnemyKind, Owner};
use invaders_core::events::AudioEvent;
use invaders_core::types::Position;

use invaders_ai::boss::{self, BossContext, BossUpdate};

use crate::world_setup;

/// Whether an active boss is present in the world.
pub fn has_boss(world: &World) -> bool {
    world
        .query::<(&Enemy, &Active)>()
        .iter()
        .any(|(_, (enemy, active))| active.0 && enemy.kind.is_boss())
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    frame: u64,
    diff: &Difficulty,
    width: f64,
    audio: &mut Vec<AudioEvent>,
) {
    let mut player_aim: Option<(f64, f64)> = None;
    for (_, (_, pos, body, active)) in world
        .query::<(&PlayerShip, &Position, &Body, &Active)>()
        .iter()
    {
        if active.0 {
            player_aim = Some((pos.x + body.width / 2.0, pos.y));
        }
    }
    let (player_center_x, player_y) = player_aim.unwrap_or((width / 2.0, 0.0));

    let mut update: Option<BossUpdate> = None;

    for (_, (enemy, pos, body, active)) in
        world.query_mut::<(&mut Enemy, &mut Position, &Body, &Active)>()
    {
        if !active.0 {
            continue;
        }
        let EnemyKind::Boss {
            attack,
            attack_frame,
            ..
        } = &mut enemy.kind
        else {
            continue;
        };

        pos.x += (frame as f64 / BOSS_SWAY_PERIOD).sin() * diff.boss_sway;
        pos.x = pos.x.clamp(0.0, width - body.width);

        let result = boss::advance(
            &BossContext {
                attack: *attack,
                attack_frame: *attack_frame,
                idle_threshold: diff.boss_idle_threshold,
                bullet_speed_mult: diff.bullet_speed_mult,
                enemy_bullet_speed: diff.enemy_bullet_speed,
                muzzle: Position::new(pos.x + body.width / 2.0, pos.y + body.height),
                boss_top: pos.y,
                player_center_x,
                player_y,
            },
            rng,
        );
        *attack = result.attack;
        *attack_frame = result.attack_frame;
        update = Some(result);
        break;
    }

    if let Some(result) = update {
        audio.extend(result.audio);
        for shot in result.shots {
            world_setup::spawn_bullet(
                world,
                shot.pos.x,
                shot.pos.y,
                shot.width,
                shot.height,
                shot.tint,
                Owner::Enemy,
                shot.kind,
                shot.vel,
                DEFAULT_BULLET_DAMAGE,
            );
        }
    }
}
