//! Per-instance count-up state machine.
//!
//! [`CounterAnimationState`] knows nothing about the browser: the driver
//! feeds it a visibility transition and frame timestamps (milliseconds, as
//! handed out by `requestAnimationFrame`) and renders whatever it reports.

use super::easing::{ease_out_quart, progress};
use super::format::CounterFormat;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Construction-time parameters of a counter.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    pub end: f64,
    pub duration_ms: f64,
    pub format: CounterFormat,
}

impl CounterConfig {
    pub fn new(end: f64) -> Self {
        Self {
            end,
            duration_ms: DEFAULT_DURATION_MS,
            format: CounterFormat::default(),
        }
    }

    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.format.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.format.suffix = suffix.into();
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.format.decimals = decimals;
        self
    }
}

/// What the driver should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Nothing to animate (not yet visible, or already finished).
    Idle,
    /// Value changed; request another frame.
    Continue,
    /// Value reached the target; no more frames.
    Finished,
}

#[derive(Clone, Debug)]
pub struct CounterAnimationState {
    target: f64,
    current_value: f64,
    is_visible: bool,
    start_timestamp: Option<f64>,
    finished: bool,
    duration_ms: f64,
    format: CounterFormat,
}

impl CounterAnimationState {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            target: config.end,
            current_value: 0.0,
            is_visible: false,
            start_timestamp: None,
            finished: false,
            duration_ms: config.duration_ms,
            format: config.format,
        }
    }

    /// Latches visibility. Returns `true` only for the first call; the
    /// animation never restarts on later visibility changes.
    pub fn mark_visible(&mut self) -> bool {
        if self.is_visible {
            return false;
        }
        self.is_visible = true;
        true
    }

    /// Advances the animation to `timestamp`.
    pub fn tick(&mut self, timestamp: f64) -> FrameStep {
        if !self.is_visible || self.finished {
            return FrameStep::Idle;
        }

        let start = *self.start_timestamp.get_or_insert(timestamp);
        let progress = progress(timestamp - start, self.duration_ms);

        if progress >= 1.0 {
            self.current_value = self.target;
            self.finished = true;
            return FrameStep::Finished;
        }

        self.current_value = ease_out_quart(progress) * self.target;
        FrameStep::Continue
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }

    /// Text for the current state; the placeholder until visible.
    pub fn text(&self) -> String {
        if self.is_visible {
            self.format.render(self.current_value)
        } else {
            self.format.render_placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(config: CounterConfig) -> CounterAnimationState {
        let mut state = CounterAnimationState::new(config);
        assert!(state.mark_visible());
        state
    }

    #[test]
    fn test_hidden_counter_does_not_animate() {
        let mut state = CounterAnimationState::new(CounterConfig::new(500.0));
        assert_eq!(state.tick(16.0), FrameStep::Idle);
        assert_eq!(state.current_value(), 0.0);
        assert_eq!(state.start_timestamp(), None);
    }

    #[test]
    fn test_placeholder_before_visible() {
        let configs = [
            CounterConfig::new(1_234_567.0),
            CounterConfig::new(99.9).decimals(1).suffix("%"),
            CounterConfig::new(10_000.0).prefix("₹").suffix("Cr+"),
            CounterConfig::new(-40.0).decimals(2).prefix("Δ"),
        ];
        for config in configs {
            let expected = format!("{}0{}", config.format.prefix, config.format.suffix);
            assert_eq!(CounterAnimationState::new(config).text(), expected);
        }
    }

    #[test]
    fn test_first_frame_records_start() {
        let mut state = visible(CounterConfig::new(100.0));
        assert_eq!(state.tick(1234.5), FrameStep::Continue);
        assert_eq!(state.start_timestamp(), Some(1234.5));
        assert_eq!(state.current_value(), 0.0);

        state.tick(1500.0);
        assert_eq!(state.start_timestamp(), Some(1234.5));
    }

    #[test]
    fn test_monotonic_until_target() {
        let mut state = visible(CounterConfig::new(1_000.0));
        let mut prev = 0.0;
        let mut ts = 100.0;
        loop {
            let step = state.tick(ts);
            assert!(state.current_value() >= prev);
            assert!(state.current_value() <= 1_000.0);
            prev = state.current_value();
            if step == FrameStep::Finished {
                break;
            }
            ts += 16.7;
        }
        assert_eq!(state.current_value(), 1_000.0);
    }

    #[test]
    fn test_midpoint_uses_quartic_ease() {
        let mut state = visible(CounterConfig::new(1_000.0));
        state.tick(0.0);
        state.tick(1_000.0);
        assert!((state.current_value() - 937.5).abs() < 1e-9);
    }

    #[test]
    fn test_terminal_value_is_exact_and_final() {
        let mut state = visible(CounterConfig::new(99.9).decimals(1).suffix("%"));
        state.tick(0.0);
        assert_eq!(state.tick(2_500.0), FrameStep::Finished);
        assert_eq!(state.current_value(), 99.9);
        assert_eq!(state.text(), "99.9%");

        assert_eq!(state.tick(3_000.0), FrameStep::Idle);
        assert_eq!(state.current_value(), 99.9);
    }

    #[test]
    fn test_zero_duration_snaps_on_first_frame() {
        let mut state = visible(CounterConfig::new(42.0).duration_ms(0.0));
        assert_eq!(state.tick(10.0), FrameStep::Finished);
        assert_eq!(state.current_value(), 42.0);
    }

    #[test]
    fn test_negative_duration_snaps_on_first_frame() {
        let mut state = visible(CounterConfig::new(7.0).duration_ms(-5.0));
        assert_eq!(state.tick(10.0), FrameStep::Finished);
        assert_eq!(state.current_value(), 7.0);
    }

    #[test]
    fn test_timestamp_before_start_is_clamped() {
        let mut state = visible(CounterConfig::new(100.0));
        state.tick(500.0);
        assert_eq!(state.tick(400.0), FrameStep::Continue);
        assert_eq!(state.current_value(), 0.0);
    }

    #[test]
    fn test_negative_target_is_non_increasing() {
        let mut state = visible(CounterConfig::new(-200.0));
        let mut prev = 0.0;
        for ts in [0.0, 300.0, 900.0, 1_500.0, 2_000.0] {
            state.tick(ts);
            assert!(state.current_value() <= prev);
            prev = state.current_value();
        }
        assert_eq!(state.current_value(), -200.0);
    }

    #[test]
    fn test_visibility_latches_once() {
        let mut state = CounterAnimationState::new(CounterConfig::new(10.0));
        assert!(state.mark_visible());
        assert!(!state.mark_visible());
        assert!(state.is_visible());
    }

    #[test]
    fn test_final_text_cases() {
        let cases = [
            (CounterConfig::new(1_234_567.0), "12,34,567"),
            (CounterConfig::new(99.9).decimals(1).suffix("%"), "99.9%"),
            (CounterConfig::new(10_000.0).prefix("₹").suffix("Cr+"), "₹10,000Cr+"),
        ];
        for (config, expected) in cases {
            let mut state = visible(config);
            state.tick(0.0);
            state.tick(DEFAULT_DURATION_MS);
            assert_eq!(state.text(), expected);
        }
    }
}
