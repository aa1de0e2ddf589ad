//! Session flow: START -> PLAYING -> PROPOSAL -> END
//!
//! Triggers that do not apply to the current phase are ignored. The proposal
//! reveal is a countdown owned by the state, so anything that leaves the
//! proposal phase also cancels it.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, Player, Scene, Viewport};

impl GameState {
    /// Start button: begin a fresh session
    ///
    /// Returns false if the game is not on the start screen.
    pub fn start_session(&mut self) -> bool {
        if self.phase != GamePhase::Start {
            log::debug!("Ignoring start in {:?}", self.phase);
            return false;
        }

        self.player = Some(Player::new(&self.viewport));
        self.hearts.clear();
        self.particles.clear();
        self.score = 0;
        self.decline.reset();
        self.reveal_timer = None;
        self.proposal_revealed = false;
        self.phase = GamePhase::Playing;
        self.session += 1;

        log::info!("Session {} started (seed {})", self.session, self.seed);
        self.push_event(GameEvent::SessionStarted {
            session: self.session,
        });
        self.push_event(GameEvent::ScoreChanged {
            score: 0,
            fill_percent: 0.0,
        });
        self.push_event(GameEvent::SceneChanged(Scene::Playing));
        true
    }

    /// Credit a caught heart at `pos`
    pub fn register_catch(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.score += 1;
        self.emit_spark(pos.x, pos.y);
        self.push_event(GameEvent::HeartCaught { pos });
        self.push_event(GameEvent::ScoreChanged {
            score: self.score,
            fill_percent: self.fill_percent(),
        });

        if self.score >= self.tuning.win_score {
            self.trigger_proposal();
        }
    }

    /// Meter full: switch to the proposal and arm the reveal delay
    fn trigger_proposal(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Proposal;
        self.reveal_timer = Some(self.tuning.reveal_delay_ms);
        log::info!("Meter full at {} hearts, proposal pending", self.score);
        self.push_event(GameEvent::ProposalTriggered);
    }

    /// Count down the reveal delay; shows the proposal once it runs out
    pub fn advance_timers(&mut self, dt_ms: f32) {
        let Some(remaining) = self.reveal_timer else {
            return;
        };

        let remaining = remaining - dt_ms.max(0.0);
        if remaining > 0.0 {
            self.reveal_timer = Some(remaining);
            return;
        }

        self.reveal_timer = None;
        if self.phase == GamePhase::Proposal && !self.proposal_revealed {
            self.proposal_revealed = true;
            log::info!("Proposal revealed");
            self.push_event(GameEvent::SceneChanged(Scene::Proposal));
        }
    }

    /// Yes button: celebrate
    pub fn accept(&mut self) -> bool {
        if self.phase != GamePhase::Proposal {
            log::debug!("Ignoring accept in {:?}", self.phase);
            return false;
        }

        self.phase = GamePhase::End;
        self.reveal_timer = None;
        log::info!("Proposal accepted");
        self.push_event(GameEvent::SceneChanged(Scene::Celebration));
        self.push_event(GameEvent::ProposalAccepted);
        self.emit_confetti();
        true
    }

    /// No button approached: run away while escapes remain
    ///
    /// Returns the button's new position if it moved.
    pub fn decline_activated(&mut self, button_size: Vec2) -> Option<Vec2> {
        if self.phase != GamePhase::Proposal {
            return None;
        }

        let was_settled = self.decline.is_settled();
        let moved = self
            .decline
            .activate(&self.viewport, button_size, &mut self.rng);

        match moved {
            Some(pos) => self.push_event(GameEvent::DeclineMoved { pos }),
            None if !was_settled => {
                log::info!("Decline button settled after {} escapes", self.decline.escapes);
                self.push_event(GameEvent::DeclineSettled);
            }
            None => {}
        }
        moved
    }

    /// Back to the start screen from anywhere
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.player = None;
        self.hearts.clear();
        self.particles.clear();
        self.score = 0;
        self.decline.reset();
        self.reveal_timer = None;
        self.proposal_revealed = false;

        log::info!("Game reset");
        self.push_event(GameEvent::ScoreChanged {
            score: 0,
            fill_percent: 0.0,
        });
        self.push_event(GameEvent::SceneChanged(Scene::Start));
    }

    /// Viewport changed: re-anchor and re-clamp the basket
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(player) = self.player.as_mut() {
            player.anchor(viewport.height);
            player.clamp(viewport.width);
        }
    }
}
