//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Per-frame motion, timers driven by the supplied frame delta
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod evasive;
pub mod flow;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{HeartOutcome, classify_heart, heart_caught, heart_missed};
pub use evasive::EvasiveButton;
pub use state::{
    Color, GameEvent, GamePhase, GameState, Heart, Particle, ParticleKind, Player, Scene, Viewport,
};
pub use tick::{TickInput, spawn_heart, tick, update_hearts};
