//! Player system: power-up expiry, movement, and firing.
//!
//! Firing has two modes. With the laser power-up equipped, holding fire
//! charges a beam that is released on key-up; otherwise each press spawns
//! one bullet (or three with multi-shot) gated by a cooldown.

use hecs::World;

use invaders_core::commands::InputState;
use invaders_core::components::{Active, Body, PlayerShip};
use invaders_core::constants::*;
use invaders_core::enums::{BulletKind, Owner, PowerUpKind, Tint};
use invaders_core::events::AudioEvent;
use invaders_core::types::{Position, Velocity};

use crate::world_setup;

pub fn run(world: &mut World, input: &InputState, width: f64, audio: &mut Vec<AudioEvent>) {
    // (x, y, dx) triples, spawned after the query borrow ends.
    let mut shots: Vec<(f64, f64, f64)> = Vec::new();
    // (x, y, width, damage)
    let mut beam: Option<(f64, f64, f64, f64)> = None;

    for (_, (ship, pos, body, active)) in
        world.query_mut::<(&mut PlayerShip, &mut Position, &Body, &Active)>()
    {
        if !active.0 {
            continue;
        }

        if ship.power_up.is_some() {
            ship.power_up_timer = ship.power_up_timer.saturating_sub(1);
            if ship.power_up_timer == 0 {
                ship.power_up = None;
                ship.shielded = false;
                ship.charging = false;
                ship.charge_level = 0;
            }
        }

        if input.left {
            pos.x -= PLAYER_SPEED;
        }
        if input.right {
            pos.x += PLAYER_SPEED;
        }
        pos.x = pos.x.clamp(0.0, width - body.width);

        if ship.power_up == Some(PowerUpKind::Laser) {
            if input.fire {
                if !ship.charging {
                    ship.charging = true;
                    ship.charge_level = 0;
                }
                if ship.charge_level < MAX_CHARGE_FRAMES {
                    ship.charge_level += 1;
                    if ship.charge_level % CHARGE_TICK_INTERVAL == 0 {
                        audio.push(AudioEvent::ChargeTick {
                            ratio: ship.charge_level as f64 / MAX_CHARGE_FRAMES as f64,
                        });
                    }
                }
            } else if ship.charging {
                let ratio = ship.charge_level as f64 / MAX_CHARGE_FRAMES as f64;
                let beam_width = BEAM_MIN_WIDTH + ratio * (BEAM_MAX_WIDTH - BEAM_MIN_WIDTH);
                beam = Some((
                    pos.x + body.width / 2.0 - beam_width / 2.0,
                    pos.y - BEAM_MUZZLE_OFFSET,
                    beam_width,
                    DEFAULT_BULLET_DAMAGE + ratio * BEAM_CHARGE_DAMAGE,
                ));
                audio.push(AudioEvent::LaserBlast { ratio });
                ship.charging = false;
                ship.charge_level = 0;
                ship.cooldown = CHARGE_RECOIL_COOLDOWN;
            }
        } else {
            if ship.cooldown > 0 {
                ship.cooldown -= 1;
            }
            if input.fire && ship.cooldown == 0 {
                audio.push(AudioEvent::Shoot);
                let center = pos.x + body.width / 2.0 - PLAYER_BULLET_WIDTH / 2.0;
                shots.push((center, pos.y, 0.0));
                if ship.power_up == Some(PowerUpKind::MultiShot) {
                    shots.push((center - MULTI_SHOT_OFFSET, pos.y, -MULTI_SHOT_DRIFT));
                    shots.push((center + MULTI_SHOT_OFFSET, pos.y, MULTI_SHOT_DRIFT));
                }
                ship.cooldown = if ship.power_up == Some(PowerUpKind::RapidFire) {
                    RAPID_FIRE_COOLDOWN
                } else {
                    FIRE_COOLDOWN
                };
            }
        }
    }

    for (x, y, dx) in shots {
        world_setup::spawn_bullet(
            world,
            x,
            y,
            PLAYER_BULLET_WIDTH,
            PLAYER_BULLET_HEIGHT,
            Tint::PlayerBullet,
            Owner::Player,
            BulletKind::Standard,
            Velocity::new(dx, -BULLET_SPEED),
            DEFAULT_BULLET_DAMAGE,
        );
    }
    if let Some((x, y, beam_width, damage)) = beam {
        world_setup::spawn_bullet(
            world,
            x,
            y,
            beam_width,
            BEAM_HEIGHT,
            Tint::BeamCore,
            Owner::Player,
            BulletKind::ChargedBeam,
            Velocity::new(0.0, -BEAM_SPEED),
            damage,
        );
    }
}
