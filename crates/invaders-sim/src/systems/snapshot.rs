//! Snapshot builder: projects the ECS world into the serializable
//! `GameSnapshot` handed to the host each frame.

use hecs::World;

use invaders_core::components::*;
use invaders_core::constants::MAX_CHARGE_FRAMES;
use invaders_core::enums::GamePhase;
use invaders_core::events::{AudioEvent, GameEvent};
use invaders_core::state::*;
use invaders_core::types::Position;

/// Current life count, readable in every phase. Zero once the ship is
/// gone and before the first run starts.
pub fn lives(world: &World) -> u32 {
    world
        .query::<&PlayerShip>()
        .iter()
        .next()
        .map(|(_, ship)| ship.lives)
        .unwrap_or(0)
}

pub fn build(
    world: &World,
    frame: u64,
    phase: GamePhase,
    level: u32,
    score: u32,
    events: Vec<GameEvent>,
    audio: Vec<AudioEvent>,
) -> GameSnapshot {
    let mut snapshot = GameSnapshot {
        frame,
        phase,
        level,
        score,
        lives: lives(world),
        player: None,
        enemies: Vec::new(),
        bullets: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        events,
        audio,
    };

    for (_, (ship, pos, body, active)) in world
        .query::<(&PlayerShip, &Position, &Body, &Active)>()
        .iter()
    {
        if !active.0 {
            continue;
        }
        snapshot.player = Some(PlayerView {
            x: pos.x,
            y: pos.y,
            width: body.width,
            height: body.height,
            tint: body.tint,
            shielded: ship.shielded,
            power_up: ship.power_up,
            power_up_timer: ship.power_up_timer,
            charging: ship.charging,
            charge_ratio: ship.charge_level as f64 / MAX_CHARGE_FRAMES as f64,
        });
    }

    for (_, (enemy, pos, body, active)) in
        world.query::<(&Enemy, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        snapshot.enemies.push(EnemyView {
            id: enemy.id,
            x: pos.x,
            y: pos.y,
            width: body.width,
            height: body.height,
            tint: body.tint,
            kind: enemy.kind.clone(),
        });
    }

    for (_, (bullet, pos, body, active)) in
        world.query::<(&Bullet, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        snapshot.bullets.push(BulletView {
            x: pos.x,
            y: pos.y,
            width: body.width,
            height: body.height,
            tint: body.tint,
            owner: bullet.owner,
            kind: bullet.kind,
        });
    }

    for (_, (pickup, pos, body, active)) in
        world.query::<(&PowerUp, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        snapshot.power_ups.push(PowerUpView {
            x: pos.x,
            y: pos.y,
            width: body.width,
            height: body.height,
            tint: body.tint,
            kind: pickup.kind,
        });
    }

    for (_, (particle, pos, body, active)) in
        world.query::<(&Particle, &Position, &Body, &Active)>().iter()
    {
        if !active.0 {
            continue;
        }
        snapshot.particles.push(ParticleView {
            x: pos.x,
            y: pos.y,
            width: body.width,
            height: body.height,
            tint: body.tint,
            alpha: particle.life_ratio(),
        });
    }

    snapshot
}
