//! "Run this before the next repaint" scheduling.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// One-shot per-frame callback registration with an explicit cancel handle.
///
/// The callback receives the frame timestamp in milliseconds.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;

    /// Cancels a pending frame. Cancelling a frame that already ran is a no-op.
    fn cancel_frame(&self, handle: Self::Handle);
}

/// `window.requestAnimationFrame` backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameScheduler;

pub struct AnimationFrame {
    id: Option<i32>,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        let fired = Rc::new(Cell::new(false));
        let closure: Closure<dyn FnMut(f64)> = {
            let fired = fired.clone();
            Closure::once(move |timestamp: f64| {
                fired.set(true);
                callback(timestamp);
            })
        };

        let id = web_sys::window().and_then(|window| {
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .map_err(|e| warn!("requestAnimationFrame failed: {:?}", e))
                .ok()
        });

        AnimationFrame {
            id,
            fired,
            _closure: closure,
        }
    }

    fn cancel_frame(&self, handle: AnimationFrame) {
        if handle.fired.get() {
            return;
        }
        if let (Some(id), Some(window)) = (handle.id, web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
