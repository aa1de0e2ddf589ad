//! Canvas 2D backend
//!
//! Draws in CSS pixels; the backing store is scaled by the device pixel ratio
//! so lines stay sharp on HiDPI screens.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{
    BASKET_FILL, BASKET_LINE_WIDTH, BASKET_STROKE, basket_shape, confetti_rect, css_color,
    heart_path,
};
use crate::sim::{GameState, Heart, Particle, ParticleKind, Player, Viewport};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, viewport: Viewport) -> Result<Self, JsValue> {
        use wasm_bindgen::JsCast;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let mut renderer = Self {
            canvas,
            ctx,
            viewport,
        };
        renderer.resize(viewport)?;
        Ok(renderer)
    }

    /// Match the canvas to the viewport and reset the HiDPI transform
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        self.viewport = viewport;

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;

        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let dpr = viewport.dpr as f64;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
    }

    /// Draw one frame: basket, hearts (frozen or falling), particles
    pub fn render(&self, state: &GameState) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );

        if let Some(player) = &state.player {
            self.draw_player(player);
        }
        for heart in &state.hearts {
            self.draw_heart(heart);
        }
        for particle in &state.particles {
            self.draw_particle(particle);
        }
    }

    fn draw_player(&self, player: &Player) {
        let shape = basket_shape(player);
        let ctx = &self.ctx;

        ctx.set_fill_style_str(BASKET_FILL);
        ctx.begin_path();
        let body = shape.body;
        let _ = ctx.arc(
            body.center.x as f64,
            body.center.y as f64,
            body.radius as f64,
            body.start as f64,
            body.end as f64,
        );
        ctx.fill();

        ctx.begin_path();
        ctx.set_stroke_style_str(BASKET_STROKE);
        ctx.set_line_width(BASKET_LINE_WIDTH as f64);
        let handle = shape.handle;
        let _ = ctx.arc(
            handle.center.x as f64,
            handle.center.y as f64,
            handle.radius as f64,
            handle.start as f64,
            handle.end as f64,
        );
        ctx.stroke();
    }

    fn draw_heart(&self, heart: &Heart) {
        let path = heart_path(heart.x, heart.y, heart.size);
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&css_color(&heart.color()));
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for curve in &path.curves {
            ctx.bezier_curve_to(
                curve.c1.x as f64,
                curve.c1.y as f64,
                curve.c2.x as f64,
                curve.c2.y as f64,
                curve.to.x as f64,
                curve.to.y as f64,
            );
        }
        ctx.fill();
    }

    fn draw_particle(&self, particle: &Particle) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(particle.alpha() as f64);
        ctx.set_fill_style_str(&css_color(&particle.color));

        match particle.kind {
            ParticleKind::Confetti => {
                ctx.save();
                let _ = ctx.translate(particle.pos.x as f64, particle.pos.y as f64);
                let _ = ctx.rotate(particle.rotation as f64);
                let (x, y, w, h) = confetti_rect(particle.size);
                ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
                ctx.restore();
            }
            ParticleKind::Spark => {
                ctx.begin_path();
                let _ = ctx.arc(
                    particle.pos.x as f64,
                    particle.pos.y as f64,
                    particle.size as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
        }

        ctx.set_global_alpha(1.0);
    }
}
