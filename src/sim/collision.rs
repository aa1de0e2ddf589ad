//! Catch and miss detection
//!
//! Deliberately loose: only the heart's left-edge x sample is tested against
//! the basket span, and only its bottom edge against the basket rim.

use super::state::{Heart, Player};

/// Outcome of testing one heart against the basket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartOutcome {
    /// Landed in the basket
    Caught,
    /// Fell past the bottom of the viewport
    Missed,
    /// Still falling
    Falling,
}

/// Bottom edge past the rim and left edge strictly inside the basket span
#[inline]
pub fn heart_caught(heart: &Heart, player: &Player) -> bool {
    heart.y + heart.size > player.y && heart.x > player.x && heart.x < player.x + player.w
}

/// Top edge below the viewport
#[inline]
pub fn heart_missed(heart: &Heart, viewport_height: f32) -> bool {
    heart.y > viewport_height
}

/// Classify a heart; a catch takes priority over a miss
pub fn classify_heart(heart: &Heart, player: &Player, viewport_height: f32) -> HeartOutcome {
    if heart_caught(heart, player) {
        HeartOutcome::Caught
    } else if heart_missed(heart, viewport_height) {
        HeartOutcome::Missed
    } else {
        HeartOutcome::Falling
    }
}
