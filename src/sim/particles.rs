//! Spark and confetti bursts
//!
//! Particles move linearly and lose life at a fixed rate; nothing here pulls
//! them around.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Color, GameState, Particle, ParticleKind};
use crate::consts::*;

/// Size and spin every particle gets
fn base_particle(rng: &mut Pcg32, pos: Vec2, vel: Vec2, life: f32, color: Color, kind: ParticleKind) -> Particle {
    let size = rng.random::<f32>() * 5.0 + 2.0;
    let rotation = rng.random::<f32>() * std::f32::consts::TAU;
    let rotation_speed = (rng.random::<f32>() - 0.5) * 0.25;
    Particle {
        pos,
        vel,
        size,
        life,
        color,
        kind,
        rotation,
        rotation_speed,
    }
}

/// One spark at a point, drifting up to 2px/frame on each axis
pub fn spark(rng: &mut Pcg32, pos: Vec2) -> Particle {
    let vel = Vec2::new(
        (rng.random::<f32>() - 0.5) * 4.0,
        (rng.random::<f32>() - 0.5) * 4.0,
    );
    base_particle(rng, pos, vel, SPARK_LIFE, Color::SPARK, ParticleKind::Spark)
}

/// One confetti piece along the top edge, falling
pub fn confetti(rng: &mut Pcg32, viewport_width: f32) -> Particle {
    let pos = Vec2::new(rng.random::<f32>() * viewport_width, -10.0);
    let vel = Vec2::new(
        (rng.random::<f32>() - 0.5) * 10.0,
        rng.random::<f32>() * 6.0 + 2.0,
    );
    let color = Color::Hsla {
        h: rng.random::<f32>() * 360.0,
        s: 90.0,
        l: 65.0,
        a: 0.95,
    };
    base_particle(rng, pos, vel, CONFETTI_LIFE, color, ParticleKind::Confetti)
}

impl GameState {
    /// Burst of SPARK_COUNT sparks at a point
    pub fn emit_spark(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        for _ in 0..SPARK_COUNT {
            let particle = spark(&mut self.rng, pos);
            self.particles.push(particle);
        }
    }

    /// Confetti across the top of the viewport, fewer on narrow screens
    pub fn emit_confetti(&mut self) {
        let count = self.tuning.confetti_for(self.viewport.is_narrow());
        let width = self.viewport.width;
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = confetti(&mut self.rng, width);
            self.particles.push(particle);
        }
    }

    /// Advance every particle one frame and drop the expired ones
    pub fn update_particles(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }
}
