//! Wiring of one counter instance: a driver plus a visibility notifier,
//! released together.

use std::rc::Rc;

use super::animation::CounterConfig;
use super::driver::CounterDriver;
use super::frame::FrameScheduler;
use super::visibility::VisibilityNotifier;

/// Where a mounted counter reports to. The hook points these at its state
/// setters.
pub struct CounterSink {
    /// Back to the pre-visible placeholder. Called once, before anything else.
    pub on_reset: Box<dyn Fn()>,
    pub on_visible: Box<dyn Fn()>,
    pub on_frame: Box<dyn Fn(f64)>,
}

pub struct MountedCounter<S: FrameScheduler, V: VisibilityNotifier> {
    driver: Rc<CounterDriver<S>>,
    notifier: V,
}

impl<S, V> MountedCounter<S, V>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
    V: VisibilityNotifier,
{
    /// Resets the sink, then arms the driver behind `notifier`. A notifier
    /// that fires synchronously starts the animation before this returns.
    pub fn mount(config: CounterConfig, scheduler: S, mut notifier: V, sink: CounterSink) -> Self {
        let CounterSink {
            on_reset,
            on_visible,
            on_frame,
        } = sink;

        on_reset();

        let driver = Rc::new(CounterDriver::new(config, scheduler, on_frame));
        {
            let driver = driver.clone();
            notifier.on_become_visible(Box::new(move || {
                on_visible();
                driver.notify_visible();
            }));
        }

        Self { driver, notifier }
    }

    pub fn driver(&self) -> &CounterDriver<S> {
        &self.driver
    }
}

impl<S: FrameScheduler, V: VisibilityNotifier> Drop for MountedCounter<S, V> {
    fn drop(&mut self) {
        self.notifier.dispose();
        self.driver.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::frame::testing::ManualFrames;
    use crate::counter::visibility::ImmediateVisibility;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Reset,
        Visible,
        Frame(f64),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    fn sink(log: &Log) -> CounterSink {
        let (reset, visible, frame) = (log.clone(), log.clone(), log.clone());
        CounterSink {
            on_reset: Box::new(move || reset.borrow_mut().push(Event::Reset)),
            on_visible: Box::new(move || visible.borrow_mut().push(Event::Visible)),
            on_frame: Box::new(move |v| frame.borrow_mut().push(Event::Frame(v))),
        }
    }

    /// Holds its callback until the test fires it, like an off-screen element.
    #[derive(Clone, Default)]
    struct DeferredVisibility {
        pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
    }

    impl DeferredVisibility {
        fn fire(&self) {
            let pending = self.pending.borrow_mut().take();
            if let Some(cb) = pending {
                cb();
            }
        }
    }

    impl VisibilityNotifier for DeferredVisibility {
        fn on_become_visible(&mut self, callback: Box<dyn FnOnce()>) {
            *self.pending.borrow_mut() = Some(callback);
        }

        fn dispose(&mut self) {
            self.pending.borrow_mut().take();
        }
    }

    fn run_all(frames: &ManualFrames, mut ts: f64) {
        while frames.run(ts) {
            ts += 250.0;
        }
    }

    #[test]
    fn test_reset_comes_first_then_animation() {
        let log = Log::default();
        let frames = ManualFrames::default();
        let mounted = MountedCounter::mount(
            CounterConfig::new(40.0),
            frames.clone(),
            ImmediateVisibility::default(),
            sink(&log),
        );

        assert_eq!(log.borrow()[..2], [Event::Reset, Event::Visible]);
        run_all(&frames, 0.0);
        assert_eq!(log.borrow().last(), Some(&Event::Frame(40.0)));
        assert!(mounted.driver().is_finished());
    }

    #[test]
    fn test_remount_after_change_starts_from_placeholder() {
        let log = Log::default();
        let frames = ManualFrames::default();
        let first = MountedCounter::mount(
            CounterConfig::new(100.0),
            frames.clone(),
            ImmediateVisibility::default(),
            sink(&log),
        );
        frames.run(0.0);
        frames.run(500.0);
        drop(first);
        assert_eq!(frames.pending(), 0);

        log.borrow_mut().clear();
        let _second = MountedCounter::mount(
            CounterConfig::new(300.0),
            frames.clone(),
            ImmediateVisibility::default(),
            sink(&log),
        );
        run_all(&frames, 1_000.0);

        let events = log.borrow();
        assert_eq!(events[..3], [Event::Reset, Event::Visible, Event::Frame(0.0)]);
        assert_eq!(events.last(), Some(&Event::Frame(300.0)));
    }

    #[test]
    fn test_remount_off_screen_stays_on_placeholder() {
        let log = Log::default();
        let frames = ManualFrames::default();
        let first = MountedCounter::mount(
            CounterConfig::new(100.0).duration_ms(0.0),
            frames.clone(),
            ImmediateVisibility::default(),
            sink(&log),
        );
        run_all(&frames, 0.0);
        drop(first);

        log.borrow_mut().clear();
        let visibility = DeferredVisibility::default();
        let second = MountedCounter::mount(
            CounterConfig::new(200.0),
            frames.clone(),
            visibility.clone(),
            sink(&log),
        );

        assert_eq!(*log.borrow(), vec![Event::Reset]);
        assert_eq!(frames.pending(), 0);
        assert_eq!(second.driver().text(), "0");

        visibility.fire();
        assert_eq!(log.borrow().last(), Some(&Event::Visible));
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn test_unmount_before_visible_drops_callback() {
        let log = Log::default();
        let frames = ManualFrames::default();
        let visibility = DeferredVisibility::default();
        let mounted = MountedCounter::mount(
            CounterConfig::new(10.0),
            frames.clone(),
            visibility.clone(),
            sink(&log),
        );
        drop(mounted);

        visibility.fire();
        assert_eq!(*log.borrow(), vec![Event::Reset]);
        assert_eq!(frames.pending(), 0);
    }
}
