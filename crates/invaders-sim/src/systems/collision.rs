//! Collision and damage resolution.
//!
//! Three passes: player vs power-ups, player bullets vs enemies, enemy
//! bullets vs the player. Everything that dies here is only flagged
//! inactive; the cleanup system despawns at the frame boundary, so every
//! pass re-checks `Active` before acting. Cosmetic bursts and drop rolls
//! are collected during the scans and spawned afterwards, once the query
//! borrows are released.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use invaders_core::components::{Active, Body, Bullet, Enemy, PlayerShip, PowerUp};
use invaders_core::constants::*;
use invaders_core::enums::{BulletKind, EnemyKind, Owner, PowerUpKind, Tint};
use invaders_core::events::AudioEvent;
use invaders_core::types::{boxes_overlap, Position};

use crate::world_setup;

/// What the resolver did to the player this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionReport {
    /// The player lost a life but survived.
    pub player_hit: bool,
    /// The player lost their last life.
    pub player_dead: bool,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    audio: &mut Vec<AudioEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    let player = find_player(world);

    // Deferred spawns: (x, y, tint, count, with_boom) bursts and drop rolls.
    let mut bursts: Vec<(f64, f64, Tint, u32)> = Vec::new();
    let mut drops: Vec<(f64, f64)> = Vec::new();

    if let Some((player_entity, ppos, pbody)) = player {
        collect_power_ups(world, player_entity, ppos, pbody, audio);
    }

    resolve_player_bullets(world, score, audio, &mut bursts, &mut drops);

    if let Some((player_entity, ppos, pbody)) = player {
        resolve_enemy_bullets(
            world,
            player_entity,
            ppos,
            pbody,
            audio,
            &mut bursts,
            &mut report,
        );
    }

    for (x, y, tint, count) in bursts {
        audio.push(AudioEvent::Explosion);
        world_setup::spawn_explosion(world, rng, x, y, tint, count);
    }
    for (x, y) in drops {
        world_setup::maybe_drop_power_up(world, rng, x, y);
    }

    report
}

fn find_player(world: &World) -> Option<(Entity, Position, Body)> {
    world
        .query::<(&PlayerShip, &Position, &Body, &Active)>()
        .iter()
        .find(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, body, _))| (entity, *pos, *body))
}

fn set_inactive(world: &mut World, entity: Entity) {
    if let Ok(mut active) = world.get::<&mut Active>(entity) {
        active.0 = false;
    }
}

fn collect_power_ups(
    world: &mut World,
    player_entity: Entity,
    ppos: Position,
    pbody: Body,
    audio: &mut Vec<AudioEvent>,
) {
    let pickups: Vec<(Entity, PowerUpKind, Position, Body)> = world
        .query::<(&PowerUp, &Position, &Body, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (pickup, pos, body, _))| (entity, pickup.kind, *pos, *body))
        .collect();

    for (entity, kind, pos, body) in pickups {
        if !boxes_overlap(&pos, body.width, body.height, &ppos, pbody.width, pbody.height) {
            continue;
        }
        set_inactive(world, entity);

        if let Ok(mut ship) = world.get::<&mut PlayerShip>(player_entity) {
            if kind == PowerUpKind::Shield {
                audio.push(AudioEvent::ShieldActivate);
                ship.shielded = true;
            } else {
                audio.push(AudioEvent::PowerUpCollected);
            }
            ship.power_up = Some(kind);
            ship.power_up_timer = POWERUP_DURATION;
            // Picking anything up aborts an in-flight charge.
            ship.charging = false;
            ship.charge_level = 0;
        }
    }
}

fn resolve_player_bullets(
    world: &mut World,
    score: &mut u32,
    audio: &mut Vec<AudioEvent>,
    bursts: &mut Vec<(f64, f64, Tint, u32)>,
    drops: &mut Vec<(f64, f64)>,
) {
    let bullets: Vec<Entity> = world
        .query::<(&Bullet, &Active)>()
        .iter()
        .filter(|(_, (bullet, active))| active.0 && bullet.owner == Owner::Player)
        .map(|(entity, _)| entity)
        .collect();
    let enemies: Vec<Entity> = world
        .query::<(&Enemy, &Active)>()
        .iter()
        .filter(|(_, (_, active))| active.0)
        .map(|(entity, _)| entity)
        .collect();

    for &bullet_entity in &bullets {
        let (bpos, bbody, kind, damage, mut hit_ids) = {
            let mut query = match world
                .query_one::<(&Position, &Body, &Bullet)>(bullet_entity)
            {
                Ok(query) => query,
                Err(_) => continue,
            };
            let Some((pos, body, bullet)) = query.get() else {
                continue;
            };
            (*pos, *body, bullet.kind, bullet.damage, bullet.hit_ids.clone())
        };
        let piercing = kind == BulletKind::ChargedBeam;

        for &enemy_entity in &enemies {
            // Enemies killed by an earlier bullet this frame are only
            // flagged, so re-check.
            let snapshot = {
                let mut query = match world
                    .query_one::<(&Enemy, &Position, &Body, &Active)>(enemy_entity)
                {
                    Ok(query) => query,
                    Err(_) => continue,
                };
                match query.get() {
                    Some((enemy, pos, body, active))
                        if active.0 && !hit_ids.contains(&enemy.id) =>
                    {
                        Some((enemy.id, enemy.value, enemy.kind.is_boss(), *pos, *body))
                    }
                    _ => None,
                }
            };
            let Some((enemy_id, value, is_boss, epos, ebody)) = snapshot else {
                continue;
            };
            if !boxes_overlap(
                &bpos,
                bbody.width,
                bbody.height,
                &epos,
                ebody.width,
                ebody.height,
            ) {
                continue;
            }

            if is_boss {
                audio.push(AudioEvent::BossHit);
                bursts.push((
                    bpos.x + bbody.width / 2.0,
                    bpos.y,
                    Tint::White,
                    IMPACT_PARTICLES,
                ));

                let mut dead = false;
                if let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) {
                    if let EnemyKind::Boss { health, .. } = &mut enemy.kind {
                        *health -= damage;
                        dead = *health <= 0.0;
                    }
                }
                if dead {
                    set_inactive(world, enemy_entity);
                    *score += value;
                    bursts.push((
                        epos.x + ebody.width / 2.0,
                        epos.y + ebody.height / 2.0,
                        ebody.tint,
                        BOSS_EXPLOSION_PARTICLES,
                    ));
                }
            } else {
                set_inactive(world, enemy_entity);
                *score += value;
                bursts.push((
                    epos.x + ebody.width / 2.0,
                    epos.y + ebody.height / 2.0,
                    ebody.tint,
                    EXPLOSION_PARTICLES,
                ));
                drops.push((epos.x + ebody.width / 2.0, epos.y));
            }

            if piercing {
                // Beams record each victim and keep flying, damaging any
                // further enemies they overlap this same frame.
                hit_ids.insert(enemy_id);
                bursts.push((
                    epos.x + ebody.width / 2.0,
                    epos.y + ebody.height / 2.0,
                    Tint::BeamGlow,
                    BEAM_IMPACT_PARTICLES,
                ));
            } else {
                set_inactive(world, bullet_entity);
                break;
            }
        }

        if piercing {
            if let Ok(mut bullet) = world.get::<&mut Bullet>(bullet_entity) {
                bullet.hit_ids = hit_ids;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn resolve_enemy_bullets(
    world: &mut World,
    player_entity: Entity,
    ppos: Position,
    pbody: Body,
    audio: &mut Vec<AudioEvent>,
    bursts: &mut Vec<(f64, f64, Tint, u32)>,
    report: &mut CollisionReport,
) {
    let bullets: Vec<Entity> = world
        .query::<(&Bullet, &Active)>()
        .iter()
        .filter(|(_, (bullet, active))| active.0 && bullet.owner == Owner::Enemy)
        .map(|(entity, _)| entity)
        .collect();

    let center_x = ppos.x + pbody.width / 2.0;
    let center_y = ppos.y + pbody.height / 2.0;

    for bullet_entity in bullets {
        if report.player_dead {
            break;
        }

        let overlap = {
            let mut query = match world.query_one::<(&Position, &Body, &Active)>(bullet_entity) {
                Ok(query) => query,
                Err(_) => continue,
            };
            match query.get() {
                Some((pos, body, active)) if active.0 => boxes_overlap(
                    pos,
                    body.width,
                    body.height,
                    &ppos,
                    pbody.width,
                    pbody.height,
                ),
                _ => false,
            }
        };
        if !overlap {
            continue;
        }

        set_inactive(world, bullet_entity);

        let mut dead = false;
        if let Ok(mut ship) = world.get::<&mut PlayerShip>(player_entity) {
            if ship.shielded {
                ship.shielded = false;
                ship.power_up = None;
                bursts.push((center_x, center_y, Tint::PlayerShield, SHIELD_POP_PARTICLES));
                // Dull thud rather than a full explosion.
                audio.push(AudioEvent::BossHit);
            } else {
                bursts.push((center_x, center_y, pbody.tint, EXPLOSION_PARTICLES));
                ship.lives = ship.lives.saturating_sub(1);
                if ship.lives == 0 {
                    dead = true;
                } else {
                    report.player_hit = true;
                }
            }
        }
        if dead {
            set_inactive(world, player_entity);
            report.player_dead = true;
        }
    }
}
