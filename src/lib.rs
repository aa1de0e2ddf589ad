//! Love Catch - catch the falling hearts, then answer the question
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, particles, game flow)
//! - `renderer`: Canvas 2D drawing and the pure geometry behind it
//! - `platform`: Frame pacing, DOM scenes and input plumbing
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, GameState, Scene, TickInput, Viewport, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Player (basket) dimensions
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Distance from the bottom of the viewport to the basket rim
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;
    /// Keyboard steering speed (pixels per frame)
    pub const PLAYER_KEY_SPEED: f32 = 9.0;

    /// Heart size: base + random span (22-40px)
    pub const HEART_SIZE_BASE: f32 = 22.0;
    pub const HEART_SIZE_SPAN: f32 = 18.0;
    /// Heart fall speed: base + random span (2-4.8 px/frame)
    pub const HEART_SPEED_BASE: f32 = 2.0;
    pub const HEART_SPEED_SPAN: f32 = 2.8;
    /// Heart hue range (pinks wrapping past red)
    pub const HEART_HUE_BASE: f32 = 346.0;
    pub const HEART_HUE_SPAN: f32 = 16.0;

    /// Sparks emitted per catch
    pub const SPARK_COUNT: usize = 6;
    pub const SPARK_LIFE: f32 = 100.0;
    pub const CONFETTI_LIFE: f32 = 140.0;
    /// Life lost by every particle each frame
    pub const PARTICLE_DECAY: f32 = 2.0;
    /// Life at which a particle is fully opaque (opacity = life / this)
    pub const PARTICLE_FADE_LIFE: f32 = 100.0;

    /// Viewports narrower than this get mobile tweaks
    pub const NARROW_VIEWPORT_WIDTH: f32 = 600.0;

    /// Evasive decline button keeps this far from the edges
    pub const DECLINE_PADDING: f32 = 16.0;

    /// Largest frame delta fed to the simulation (ms)
    pub const MAX_FRAME_DT_MS: f32 = 100.0;
    /// Nominal frame delta at 60 Hz (ms)
    pub const FRAME_DT_MS: f32 = 1000.0 / 60.0;
}

/// Fill percentage of the love meter for a score
#[inline]
pub fn fill_percent(score: u32, win_score: u32) -> f32 {
    if win_score == 0 {
        return 100.0;
    }
    (score as f32 / win_score as f32 * 100.0).min(100.0)
}
