//! Easing curve for the count-up animation.

/// Ease-out quartic: `1 - (1 - t)^4`.
///
/// Fast initial rise, slow settle. Input is clamped to `[0, 1]` so a frame
/// timestamp that lands before the recorded start never produces a negative
/// value.
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// Fraction of the animation completed after `elapsed_ms`.
///
/// Non-positive (or non-finite) durations complete immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms.is_finite() && duration_ms > 0.0) {
        return 1.0;
    }
    let elapsed = if elapsed_ms.is_nan() { 0.0 } else { elapsed_ms.max(0.0) };
    (elapsed / duration_ms).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_boundaries() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn test_ease_midpoint() {
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_ease_strictly_increasing() {
        let mut prev = ease_out_quart(0.0);
        for i in 1..=100 {
            let v = ease_out_quart(i as f64 / 100.0);
            assert!(v > prev, "not increasing at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range() {
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(3.0), 1.0);
        assert_eq!(ease_out_quart(f64::NAN), 0.0);
    }

    #[test]
    fn test_progress_non_positive_duration_snaps() {
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(0.0, -100.0), 1.0);
        assert_eq!(progress(5.0, f64::NAN), 1.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-20.0, 2000.0), 0.0);
        assert_eq!(progress(1000.0, 2000.0), 0.5);
        assert_eq!(progress(4000.0, 2000.0), 1.0);
    }
}
