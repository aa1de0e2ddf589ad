//! Canvas 2D rendering module
//!
//! Geometry is built in `shapes` so it can be tested natively; `canvas`
//! replays it onto a `CanvasRenderingContext2d` in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{BasketShape, HeartPath, basket_shape, css_color, heart_path};
