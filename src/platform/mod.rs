//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (`clock`)
//! - The requestAnimationFrame loop (`frame_loop`, web only)
//! - Scene overlays, the love meter and the decline button (`dom`, web only)

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frame_loop;

pub use clock::FrameClock;
#[cfg(target_arch = "wasm32")]
pub use dom::Dom;
#[cfg(target_arch = "wasm32")]
pub use frame_loop::FrameLoop;
