//! Enemy behavior state machines for NEON INVADERS.
//!
//! Pure functions that compute state transitions and shot volleys for the
//! boss attack automaton and the spider dive cycle. No ECS dependency —
//! everything operates on plain data, with randomness injected by the
//! caller's RNG.

pub mod boss;
pub mod spider;
