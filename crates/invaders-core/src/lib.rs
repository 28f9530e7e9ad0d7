//! Core types and definitions for the NEON INVADERS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshot views, events, constants, and the
//! difficulty model. It has no dependency on the ECS or any runtime
//! framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod difficulty;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
