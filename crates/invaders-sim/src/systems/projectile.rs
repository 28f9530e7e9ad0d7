//! Projectile system: homing steering, kinematic advance, and
//! out-of-bounds pruning for bullets and falling power-ups.

use hecs::World;

use invaders_core::components::{Active, Body, Bullet, PlayerShip, PowerUp};
use invaders_core::constants::*;
use invaders_core::difficulty::Difficulty;
use invaders_core::enums::{BulletKind, Owner};
use invaders_core::types::{Position, Velocity};

pub fn run(world: &mut World, diff: &Difficulty, height: f64) {
    // (target_x, target_y, pass_line): homing bullets steer toward the
    // player's center until they sink below the pass line, then give up
    // and bleed off horizontal speed.
    let mut target: Option<(f64, f64, f64)> = None;
    for (_, (_, pos, body, active)) in world
        .query::<(&PlayerShip, &Position, &Body, &Active)>()
        .iter()
    {
        if active.0 {
            target = Some((
                pos.x + body.width / 2.0,
                pos.y + body.height / 2.0,
                pos.y + body.height / 4.0,
            ));
        }
    }

    for (_, (bullet, pos, vel, active)) in
        world.query_mut::<(&Bullet, &mut Position, &mut Velocity, &mut Active)>()
    {
        if !active.0 {
            continue;
        }

        if bullet.kind == BulletKind::Homing && bullet.owner == Owner::Enemy {
            match target {
                Some((tx, ty, pass_line)) if pos.y <= pass_line => {
                    let dx = tx - pos.x;
                    let dy = ty - pos.y;
                    let dist = pos.distance_to(&Position::new(tx, ty));
                    if dist > 0.0 {
                        let target_dx = dx / dist * diff.homing_speed;
                        let target_dy = dy / dist * diff.homing_speed;
                        vel.dx += (target_dx - vel.dx) * HOMING_BLEND_RATE;
                        vel.dy += (target_dy - vel.dy) * HOMING_BLEND_RATE;
                    }
                }
                _ => vel.dx *= HOMING_DECAY,
            }
        }

        pos.x += vel.dx;
        pos.y += vel.dy;

        // The generous top margin lets upward beams finish their run.
        if pos.y < -BULLET_TOP_MARGIN || pos.y > height {
            active.0 = false;
        }
    }
}

pub fn run_power_ups(world: &mut World, height: f64) {
    for (_, (_, pos, vel, active)) in
        world.query_mut::<(&PowerUp, &mut Position, &Velocity, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        pos.y += vel.dy;
        if pos.y > height {
            active.0 = false;
        }
    }
}
