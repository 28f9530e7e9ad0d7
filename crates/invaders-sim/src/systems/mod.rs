//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine's scalar resources.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod flyer;
pub mod formation;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod snapshot;
