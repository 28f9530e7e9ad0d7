//! Flyer system: free movement with wall and band bounces, plus engine
//! trail particles.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::{Active, Body, Enemy};
use invaders_core::constants::*;
use invaders_core::enums::EnemyKind;
use invaders_core::types::{Position, Velocity};

use crate::world_setup;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, frame: u64, width: f64) {
    let emit_trails = frame % FLYER_TRAIL_INTERVAL == 0;
    let mut trails: Vec<(f64, f64)> = Vec::new();

    for (_, (enemy, pos, vel, body, active)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Velocity, &Body, &Active)>()
    {
        if !active.0 || !matches!(enemy.kind, EnemyKind::Flyer) {
            continue;
        }

        pos.x += vel.dx;
        pos.y += vel.dy;

        if pos.x <= 0.0 || pos.x + body.width >= width {
            vel.dx = -vel.dx;
        }
        if pos.y < FLYER_BAND_TOP || pos.y > FLYER_BAND_BOTTOM {
            vel.dy = -vel.dy;
        }

        if emit_trails {
            trails.push((pos.x + body.width / 2.0, pos.y + body.height - 2.0));
        }
    }

    for (x, y) in trails {
        world_setup::spawn_trail_particle(world, rng, x, y);
    }
}
