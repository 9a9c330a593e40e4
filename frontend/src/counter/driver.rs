//! Frame loop that owns a [`CounterAnimationState`].
//!
//! One driver per mounted counter. Visibility arms it, each frame ticks the
//! state and reports the new value, and teardown cancels whatever frame is
//! still pending. Nothing is reported after teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use super::animation::{CounterAnimationState, CounterConfig, FrameStep};
use super::frame::FrameScheduler;

struct Inner<S: FrameScheduler> {
    state: RefCell<CounterAnimationState>,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    on_frame: Box<dyn Fn(f64)>,
    torn_down: Cell<bool>,
}

pub struct CounterDriver<S: FrameScheduler> {
    inner: Rc<Inner<S>>,
}

impl<S> CounterDriver<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    /// `on_frame` receives the value after every animated frame. The
    /// scheduler must not run callbacks from inside `request_frame`.
    pub fn new(config: CounterConfig, scheduler: S, on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(CounterAnimationState::new(config)),
                scheduler,
                pending: RefCell::new(None),
                on_frame: Box::new(on_frame),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Starts the animation on the first call. Returns whether this call
    /// was the visibility transition.
    pub fn notify_visible(&self) -> bool {
        if self.inner.torn_down.get() {
            return false;
        }
        let became_visible = self.inner.state.borrow_mut().mark_visible();
        if became_visible {
            Self::schedule(&self.inner);
        }
        became_visible
    }

    fn schedule(inner: &Rc<Inner<S>>) {
        let weak = Rc::downgrade(inner);
        let handle = inner.scheduler.request_frame(Box::new(move |timestamp| {
            if let Some(inner) = weak.upgrade() {
                Self::run_frame(&inner, timestamp);
            }
        }));
        *inner.pending.borrow_mut() = Some(handle);
    }

    fn run_frame(inner: &Rc<Inner<S>>, timestamp: f64) {
        // this frame's own handle
        let _running = inner.pending.borrow_mut().take();
        if inner.torn_down.get() {
            return;
        }

        let step = inner.state.borrow_mut().tick(timestamp);
        if step == FrameStep::Idle {
            return;
        }

        let value = inner.state.borrow().current_value();
        (inner.on_frame)(value);

        match step {
            FrameStep::Continue if !inner.torn_down.get() => Self::schedule(inner),
            FrameStep::Finished => debug!("counter reached {}", value),
            _ => {}
        }
    }
}

impl<S: FrameScheduler> CounterDriver<S> {
    /// Cancels the pending frame and silences the driver. Idempotent.
    pub fn teardown(&self) {
        if self.inner.torn_down.replace(true) {
            return;
        }
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.inner.scheduler.cancel_frame(handle);
        }
    }

    pub fn current_value(&self) -> f64 {
        self.inner.state.borrow().current_value()
    }

    pub fn text(&self) -> String {
        self.inner.state.borrow().text()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.state.borrow().is_finished()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<S: FrameScheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
