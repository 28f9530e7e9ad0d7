//! Particle system: drift and fade-out for cosmetic sparks and trails.

use hecs::World;

use invaders_core::components::{Active, Particle};
use invaders_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_, (particle, pos, vel, active)) in
        world.query_mut::<(&mut Particle, &mut Position, &Velocity, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        pos.x += vel.dx;
        pos.y += vel.dy;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            active.0 = false;
        }
    }
}
