//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; the platform layer only
//! feeds it input and reads events back out.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::evasive::EvasiveButton;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start button
    Start,
    /// Hearts are falling
    Playing,
    /// Meter is full, the question is (or is about to be) on screen
    Proposal,
    /// Answer accepted, celebrating
    End,
}

/// Overlay shown on top of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Start,
    /// No overlay, just the playfield
    Playing,
    Proposal,
    Celebration,
}

/// Visible area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Device pixel ratio (never below 1)
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr.is_finite() { dpr.max(1.0) } else { 1.0 },
        }
    }

    /// Phone-sized viewport
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_VIEWPORT_WIDTH
    }

    /// Backing-store size of a canvas covering this viewport
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

/// Fill color of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    /// Near-white translucent spark color
    pub const SPARK: Color = Color::Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 0.85,
    };
}

/// The catching basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    /// Rim height; re-anchored on resize only
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Horizontal velocity (pixels per frame)
    pub dx: f32,
}

impl Player {
    /// Centered basket for a viewport
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            x: viewport.width / 2.0 - PLAYER_WIDTH / 2.0,
            y: viewport.height - PLAYER_BOTTOM_OFFSET,
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
            dx: 0.0,
        }
    }

    /// Center the basket under a pointer x
    pub fn steer_to(&mut self, pointer_x: f32) {
        self.x = pointer_x - self.w / 2.0;
    }

    /// Re-derive the vertical anchor after a resize
    pub fn anchor(&mut self, viewport_height: f32) {
        self.y = viewport_height - PLAYER_BOTTOM_OFFSET;
    }

    /// Keep the basket fully on screen
    pub fn clamp(&mut self, viewport_width: f32) {
        self.x = self.x.min(viewport_width - self.w).max(0.0);
    }

    /// Apply velocity and clamp
    pub fn update(&mut self, viewport_width: f32) {
        self.x += self.dx;
        self.clamp(viewport_width);
    }
}

/// Largest f32 strictly below a positive `bound`
pub(crate) fn just_below(bound: f32) -> f32 {
    f32::from_bits(bound.to_bits() - 1)
}

/// Uniform in `[base, base + span)`; f32 rounding can otherwise land on the end
fn sample_below(rng: &mut Pcg32, base: f32, span: f32) -> f32 {
    let end = base + span;
    rng.random_range(base..end).min(just_below(end))
}

/// A falling heart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Fall speed (pixels per frame)
    pub speed: f32,
    pub hue: f32,
}

impl Heart {
    /// Spawn just above the viewport, fully inside it horizontally
    pub fn spawn(rng: &mut Pcg32, viewport_width: f32) -> Self {
        let size = sample_below(rng, HEART_SIZE_BASE, HEART_SIZE_SPAN);
        let x = rng.random::<f32>() * (viewport_width - size).max(0.0);
        let speed = sample_below(rng, HEART_SPEED_BASE, HEART_SPEED_SPAN);
        let hue = sample_below(rng, HEART_HUE_BASE, HEART_HUE_SPAN);
        Self {
            x,
            y: -size,
            size,
            speed,
            hue,
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn color(&self) -> Color {
        Color::Hsla {
            h: self.hue,
            s: 95.0,
            l: 62.0,
            a: 1.0,
        }
    }
}

/// Particle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Round dot, emitted on a catch
    Spark,
    /// Spinning rectangle, emitted on acceptance
    Confetti,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Counts down by PARTICLE_DECAY each frame; removed at zero
    pub life: f32,
    pub color: Color,
    pub kind: ParticleKind,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Particle {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
        self.life -= PARTICLE_DECAY;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Opacity from remaining life; anything above PARTICLE_FADE_LIFE is opaque
    pub fn alpha(&self) -> f32 {
        (self.life / PARTICLE_FADE_LIFE).clamp(0.0, 1.0)
    }
}

/// Things the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { session: u32 },
    HeartCaught { pos: Vec2 },
    ScoreChanged { score: u32, fill_percent: f32 },
    /// Win score reached; the proposal scene follows after the reveal delay
    ProposalTriggered,
    SceneChanged(Scene),
    ProposalAccepted,
    /// Decline button moved to a new fixed position
    DeclineMoved { pos: Vec2 },
    /// Decline button gave up running away
    DeclineSettled,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u32,
    /// Absent until the first session starts
    pub player: Option<Player>,
    pub hearts: Vec<Heart>,
    pub particles: Vec<Particle>,
    pub decline: EvasiveButton,
    /// Milliseconds until the proposal scene is revealed
    pub reveal_timer: Option<f32>,
    pub proposal_revealed: bool,
    /// Sessions started so far
    pub session: u32,
    /// Frames simulated so far
    pub frame: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game sitting on the start screen
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let decline = EvasiveButton::new(tuning.escape_cap);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            phase: GamePhase::Start,
            score: 0,
            player: None,
            hearts: Vec::new(),
            particles: Vec::new(),
            decline,
            reveal_timer: None,
            proposal_revealed: false,
            session: 0,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Queue an event for the presentation layer
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued events without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Love meter fill (0-100)
    pub fn fill_percent(&self) -> f32 {
        crate::fill_percent(self.score, self.tuning.win_score)
    }

    /// Overlay that should currently be visible
    pub fn visible_scene(&self) -> Scene {
        match self.phase {
            GamePhase::Start => Scene::Start,
            GamePhase::Playing => Scene::Playing,
            GamePhase::Proposal if self.proposal_revealed => Scene::Proposal,
            GamePhase::Proposal => Scene::Playing,
            GamePhase::End => Scene::Celebration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_below_is_adjacent() {
        let end = HEART_SIZE_BASE + HEART_SIZE_SPAN;
        assert!(just_below(end) < end);
        assert_eq!(f32::from_bits(just_below(end).to_bits() + 1), end);
    }

    #[test]
    fn test_new_state_waits_on_start() {
        let state = GameState::new(1, Viewport::default(), Tuning::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.visible_scene(), Scene::Start);
        assert!(state.player.is_none());
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_player_starts_centered() {
        let viewport = Viewport::new(800.0, 600.0, 2.0);
        let player = Player::new(&viewport);
        assert_eq!(player.x, 350.0);
        assert_eq!(player.y, 500.0);
        assert_eq!(player.dx, 0.0);
    }

    #[test]
    fn test_player_clamps_both_edges() {
        let mut player = Player::new(&Viewport::default());
        player.steer_to(-500.0);
        player.update(1280.0);
        assert_eq!(player.x, 0.0);

        player.steer_to(5000.0);
        player.update(1280.0);
        assert_eq!(player.x, 1280.0 - PLAYER_WIDTH);
    }

    #[test]
    fn test_player_narrower_viewport_pins_left() {
        let mut player = Player::new(&Viewport::default());
        player.update(60.0);
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_heart_update_is_linear() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut heart = Heart::spawn(&mut rng, 800.0);
        let start = heart.y;
        heart.update();
        heart.update();
        assert!((heart.y - (start + 2.0 * heart.speed)).abs() < 1e-4);
    }

    #[test]
    fn test_particle_alpha_fades_below_hundred() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 3.0,
            life: CONFETTI_LIFE,
            color: Color::SPARK,
            kind: ParticleKind::Confetti,
            rotation: 0.0,
            rotation_speed: 0.0,
        };
        assert_eq!(particle.alpha(), 1.0);
        particle.life = 50.0;
        assert!((particle.alpha() - 0.5).abs() < 1e-6);
        particle.life = -2.0;
        assert_eq!(particle.alpha(), 0.0);
    }

    #[test]
    fn test_viewport_backing_size() {
        let viewport = Viewport::new(375.5, 667.0, 3.0);
        assert_eq!(viewport.backing_size(), (1126, 2001));
        assert!(viewport.is_narrow());
        assert_eq!(Viewport::new(10.0, 10.0, 0.5).dpr, 1.0);
    }
}
