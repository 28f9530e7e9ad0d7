//! Fixed-timestep simulation for the invaders game.
//!
//! The engine owns a [`hecs::World`] plus a handful of scalar resources
//! (frame counter, score, phase). Hosts drive it by queueing
//! [`invaders_core::commands::PlayerCommand`]s and calling
//! [`GameEngine::step`] once per frame with the current input state; each
//! step returns a serializable [`invaders_core::state::GameSnapshot`] for
//! rendering.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};

#[cfg(test)]
mod tests;
