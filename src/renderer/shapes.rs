//! Shape generation for 2D primitives
//!
//! Pure geometry and colors; the canvas backend only replays these.

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::{Color, Player};

/// Basket body fill
pub const BASKET_FILL: &str = "#ff4d6d";
/// Basket handle stroke
pub const BASKET_STROKE: &str = "#c9184a";
pub const BASKET_LINE_WIDTH: f32 = 5.0;
/// Handle arc sits this far above the body
pub const HANDLE_LIFT: f32 = 10.0;

/// Circular arc, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

/// Basket drawn as a filled half-disc and a stroked handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketShape {
    /// Lower half-disc (0 to PI, clockwise in screen space)
    pub body: Arc,
    /// Upper handle (PI to 0)
    pub handle: Arc,
}

pub fn basket_shape(player: &Player) -> BasketShape {
    let cx = player.x + player.w / 2.0;
    let radius = player.w / 2.0;
    BasketShape {
        body: Arc {
            center: Vec2::new(cx, player.y),
            radius,
            start: 0.0,
            end: PI,
        },
        handle: Arc {
            center: Vec2::new(cx, player.y - HANDLE_LIFT),
            radius,
            start: PI,
            end: 0.0,
        },
    }
}

/// One cubic Bezier segment continuing from the previous point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

/// Closed heart outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartPath {
    pub start: Vec2,
    pub curves: [CubicBezier; 4],
}

/// Heart glyph with its top notch at (x, y + 0.3 * size) and tip at (x, y + size)
pub fn heart_path(x: f32, y: f32, size: f32) -> HeartPath {
    let top = size * 0.3;
    let half = size / 2.0;
    let mid = y + (size + top) / 2.0;
    let notch = Vec2::new(x, y + top);

    HeartPath {
        start: notch,
        curves: [
            // top left lobe
            CubicBezier {
                c1: Vec2::new(x, y),
                c2: Vec2::new(x - half, y),
                to: Vec2::new(x - half, y + top),
            },
            // down to the tip
            CubicBezier {
                c1: Vec2::new(x - half, mid),
                c2: Vec2::new(x, mid),
                to: Vec2::new(x, y + size),
            },
            // back up the right side
            CubicBezier {
                c1: Vec2::new(x, mid),
                c2: Vec2::new(x + half, mid),
                to: Vec2::new(x + half, y + top),
            },
            // top right lobe
            CubicBezier {
                c1: Vec2::new(x + half, y),
                c2: Vec2::new(x, y),
                to: notch,
            },
        ],
    }
}

/// Confetti rectangle relative to its rotated origin: (x, y, w, h)
pub fn confetti_rect(size: f32) -> (f32, f32, f32, f32) {
    (-size, -size / 2.0, size * 2.0, size)
}

/// CSS color string
pub fn css_color(color: &Color) -> String {
    match *color {
        Color::Rgba { r, g, b, a } => format!("rgba({}, {}, {}, {})", r, g, b, a),
        Color::Hsla { h, s, l, a } if a >= 1.0 => format!("hsl({:.1}, {}%, {}%)", h, s, l),
        Color::Hsla { h, s, l, a } => format!("hsla({:.1}, {}%, {}%, {})", h, s, l, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;

    #[test]
    fn test_heart_path_is_closed_and_symmetric() {
        let path = heart_path(100.0, 50.0, 40.0);
        assert!((path.start - Vec2::new(100.0, 62.0)).length() < 1e-4);
        assert_eq!(path.curves[3].to, path.start);
        // Tip at the bottom
        assert_eq!(path.curves[1].to, Vec2::new(100.0, 90.0));
        // Lobes mirror around x
        assert_eq!(path.curves[0].to.x - 100.0, -(path.curves[2].to.x - 100.0));
    }

    #[test]
    fn test_heart_stays_within_size_box() {
        let path = heart_path(0.0, 0.0, 30.0);
        for curve in &path.curves {
            for p in [curve.c1, curve.c2, curve.to] {
                assert!(p.x >= -15.0 && p.x <= 15.0);
                assert!(p.y >= 0.0 && p.y <= 30.0);
            }
        }
    }

    #[test]
    fn test_basket_shape() {
        let player = Player::new(&Viewport::new(800.0, 600.0, 1.0));
        let shape = basket_shape(&player);
        assert_eq!(shape.body.center, Vec2::new(400.0, 500.0));
        assert_eq!(shape.body.radius, 50.0);
        assert_eq!(shape.handle.center.y, 490.0);
        assert_eq!((shape.handle.start, shape.handle.end), (PI, 0.0));
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(css_color(&Color::SPARK), "rgba(255, 255, 255, 0.85)");
        let heart = Color::Hsla {
            h: 350.0,
            s: 95.0,
            l: 62.0,
            a: 1.0,
        };
        assert_eq!(css_color(&heart), "hsl(350.0, 95%, 62%)");
        let confetti = Color::Hsla {
            h: 12.34,
            s: 90.0,
            l: 65.0,
            a: 0.95,
        };
        assert_eq!(css_color(&confetti), "hsla(12.3, 90%, 65%, 0.95)");
    }

    #[test]
    fn test_confetti_rect_centered() {
        assert_eq!(confetti_rect(4.0), (-4.0, -2.0, 8.0, 4.0));
    }
}
