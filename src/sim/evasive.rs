//! The decline button that runs away
//!
//! Each activation bumps the escape counter. Until the counter reaches the cap
//! the button jumps to a random padded position; after that it stays put.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Viewport;
use crate::consts::DECLINE_PADDING;

#[derive(Debug, Clone, PartialEq)]
pub struct EvasiveButton {
    /// Activations so far this session
    pub escapes: u32,
    /// Activations after which the button stops moving
    pub cap: u32,
    /// Fixed position, or `None` while still in its layout position
    pub pos: Option<Vec2>,
}

impl EvasiveButton {
    pub fn new(cap: u32) -> Self {
        Self {
            escapes: 0,
            cap,
            pos: None,
        }
    }

    pub fn reset(&mut self) {
        self.escapes = 0;
        self.pos = None;
    }

    /// Whether the button has given up running away
    pub fn is_settled(&self) -> bool {
        self.escapes >= self.cap
    }

    /// Register an activation; returns the new position if the button moved
    pub fn activate(&mut self, viewport: &Viewport, size: Vec2, rng: &mut Pcg32) -> Option<Vec2> {
        self.escapes = self.escapes.saturating_add(1);
        if self.is_settled() {
            return None;
        }

        let max_x = viewport.width - size.x - DECLINE_PADDING;
        let max_y = viewport.height - size.y - DECLINE_PADDING;
        let x = DECLINE_PADDING.max(rng.random::<f32>() * DECLINE_PADDING.max(max_x));
        let y = DECLINE_PADDING.max(rng.random::<f32>() * DECLINE_PADDING.max(max_y));

        let pos = Vec2::new(x, y);
        self.pos = Some(pos);
        Some(pos)
    }
}
