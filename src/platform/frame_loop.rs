//! requestAnimationFrame loop with an explicit start/stop contract

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling animation-frame callback
pub struct FrameLoop {
    callback: FrameCallback,
    /// Pending request id; `None` while stopped
    handle: Rc<Cell<Option<i32>>>,
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = callback.borrow();
    let cb = cb
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}

impl FrameLoop {
    /// Create the loop and schedule its first frame
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_handle = handle.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            on_frame(time);

            // Stopped during this frame
            if next_handle.get().is_none() {
                return;
            }
            match request_frame(&next) {
                Ok(id) => next_handle.set(Some(id)),
                Err(e) => {
                    log::error!("Failed to schedule frame: {:?}", e);
                    next_handle.set(None);
                }
            }
        }));

        let frame_loop = Self { callback, handle };
        frame_loop.resume()?;
        Ok(frame_loop)
    }

    /// Schedule frames again after a stop (no-op while running)
    pub fn resume(&self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }
        let id = request_frame(&self.callback)?;
        self.handle.set(Some(id));
        Ok(())
    }

    /// Cancel the pending frame; the callback stays alive for `resume`
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}
