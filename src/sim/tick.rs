//! Per-frame simulation step
//!
//! One call per displayed frame. Motion is in pixels per frame; `dt_ms` only
//! drives timers.

use rand::Rng;

use super::collision::{HeartOutcome, classify_heart};
use super::state::{GamePhase, GameState, Heart};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer/touch x (one-shot, consumed by the frame)
    pub pointer_x: Option<f32>,
    /// Steering held left
    pub left: bool,
    /// Steering held right
    pub right: bool,
    /// Idle/demo mode - the basket chases hearts on its own
    pub idle_mode: bool,
}

impl TickInput {
    /// Horizontal velocity from held keys
    pub fn key_velocity(&self, speed: f32) -> f32 {
        match (self.left, self.right) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0.0,
        }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.frame += 1;
    state.advance_timers(dt_ms);

    // Idle/demo mode - follow the heart closest to the basket
    let mut pointer_x = input.pointer_x;
    if input.idle_mode && state.phase == GamePhase::Playing {
        if let Some(target) = lowest_heart(&state.hearts) {
            pointer_x = Some(target.x);
        }
    }

    // The basket keeps moving in every phase so the scene stays alive
    let width = state.viewport.width;
    if let Some(player) = state.player.as_mut() {
        if let Some(x) = pointer_x {
            player.steer_to(x);
        }
        player.dx = input.key_velocity(crate::consts::PLAYER_KEY_SPEED);
        player.update(width);
    }

    // Hearts only move while playing; otherwise they stay frozen in place
    if state.phase == GamePhase::Playing {
        spawn_heart(state);
        update_hearts(state);
    }

    state.update_particles();
}

/// Maybe add a heart this frame
pub fn spawn_heart(state: &mut GameState) {
    let chance = state.tuning.spawn_probability(state.viewport.is_narrow());
    if state.rng.random::<f32>() < chance {
        let heart = Heart::spawn(&mut state.rng, state.viewport.width);
        state.hearts.push(heart);
    }
}

/// Move every heart and resolve catches and misses
///
/// Walks the list back to front so removals never skip or repeat a heart.
/// Stops as soon as a catch ends play; the rest stay frozen where they are.
pub fn update_hearts(state: &mut GameState) {
    let Some(player) = state.player.clone() else {
        return;
    };
    let height = state.viewport.height;

    let mut i = state.hearts.len();
    while i > 0 {
        i -= 1;
        state.hearts[i].update();

        match classify_heart(&state.hearts[i], &player, height) {
            HeartOutcome::Caught => {
                let heart = state.hearts.remove(i);
                state.register_catch(heart.pos());
                if state.phase != GamePhase::Playing {
                    break;
                }
            }
            HeartOutcome::Missed => {
                state.hearts.remove(i);
            }
            HeartOutcome::Falling => {}
        }
    }
}

/// Heart furthest down the screen
fn lowest_heart(hearts: &[Heart]) -> Option<&Heart> {
    hearts
        .iter()
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}
