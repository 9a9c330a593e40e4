//! One-shot "became visible" notifications.
//!
//! [`IntersectionVisibility`] watches an element with an
//! `IntersectionObserver` at a 10% threshold. Where there is no observer or
//! no mounted element (headless rendering, old browsers) visibility is not
//! meaningful and the counter is treated as visible straight away.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must intersect the viewport.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub trait VisibilityNotifier {
    /// Registers the callback fired on the first not-visible to visible
    /// transition. It is never called more than once.
    fn on_become_visible(&mut self, callback: Box<dyn FnOnce()>);

    /// Releases the underlying observer. No callback runs afterwards.
    fn dispose(&mut self);
}

/// The one-shot rule on its own: reports the first intersecting
/// observation and ignores everything after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    triggered: bool,
}

impl VisibilityLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.triggered || !intersecting {
            return false;
        }
        self.triggered = true;
        true
    }

    /// One observer callback can carry several entries; any intersecting
    /// one counts.
    pub fn observe_all(&mut self, reports: impl IntoIterator<Item = bool>) -> bool {
        let intersecting = reports.into_iter().fold(false, |any, r| any || r);
        self.observe(intersecting)
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}

type PendingCallback = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Fires synchronously on registration.
#[derive(Debug, Default)]
pub struct ImmediateVisibility {
    disposed: bool,
}

impl VisibilityNotifier for ImmediateVisibility {
    fn on_become_visible(&mut self, callback: Box<dyn FnOnce()>) {
        if !self.disposed {
            callback();
        }
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

struct Observer {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

pub struct IntersectionVisibility {
    element: Option<Element>,
    callback: PendingCallback,
    observer: Option<Observer>,
    fallback: ImmediateVisibility,
}

impl IntersectionVisibility {
    pub fn new(element: Option<Element>) -> Self {
        Self {
            element,
            callback: Rc::new(RefCell::new(None)),
            observer: None,
            fallback: ImmediateVisibility::default(),
        }
    }

    fn observe(&self, element: &Element) -> Result<Observer, JsValue> {
        let latch = Rc::new(RefCell::new(VisibilityLatch::default()));
        let callback = self.callback.clone();

        let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            // the observer already filters on the threshold
            let reports = entries.iter().map(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if latch.borrow_mut().observe_all(reports) {
                observer.disconnect();
                let pending = callback.borrow_mut().take();
                if let Some(cb) = pending {
                    debug!("counter element became visible");
                    cb();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Observer {
            observer,
            _closure: closure,
        })
    }
}

impl VisibilityNotifier for IntersectionVisibility {
    fn on_become_visible(&mut self, callback: Box<dyn FnOnce()>) {
        let Some(element) = self.element.clone() else {
            debug!("counter element not mounted, treating as visible");
            self.fallback.on_become_visible(callback);
            return;
        };

        *self.callback.borrow_mut() = Some(callback);
        match self.observe(&element) {
            Ok(observer) => self.observer = Some(observer),
            Err(e) => {
                warn!("IntersectionObserver unavailable ({:?}), treating as visible", e);
                let pending = self.callback.borrow_mut().take();
                if let Some(cb) = pending {
                    self.fallback.on_become_visible(cb);
                }
            }
        }
    }

    fn dispose(&mut self) {
        self.callback.borrow_mut().take();
        if let Some(observer) = self.observer.take() {
            observer.observer.disconnect();
        }
        self.fallback.dispose();
    }
}

impl Drop for IntersectionVisibility {
    fn drop(&mut self) {
        self.dispose();
    }
}
