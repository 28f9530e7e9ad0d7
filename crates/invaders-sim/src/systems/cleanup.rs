//! Cleanup system: despawns entities flagged inactive during the frame.
//!
//! Runs last, so every other system can rely on entities staying alive
//! (if inactive) for the whole frame. The player entity is never
//! despawned — lives and score continuity survive a destroyed ship.

use hecs::{Entity, World};

use invaders_core::components::{Active, Bullet, Enemy, Particle, PowerUp};

/// Collect and despawn inactive entities. Uses a pre-allocated buffer to
/// avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_, active)) in world.query_mut::<(&Bullet, &Active)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (_, active)) in world.query_mut::<(&Enemy, &Active)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (_, active)) in world.query_mut::<(&PowerUp, &Active)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (_, active)) in world.query_mut::<(&Particle, &Active)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
