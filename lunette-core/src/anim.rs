//! Time-based value transitions.
//!
//! The "animate a property over time" capability consumed by the rest of the
//! crate: a [`Transition`] interpolates between two values over a fixed
//! duration with an easing curve, and is sampled once per rendered frame.
//! Viewport glides and carousel item swaps are both driven by this.

use std::time::{Duration, Instant};

/// Easing curve applied to a transition's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear time `t` in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// An in-flight interpolation from one value to another.
#[derive(Debug, Clone)]
pub struct Transition {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    started: Instant,
}

impl Transition {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started: Instant::now(),
        }
    }

    /// The value the transition is heading toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Value at `now`. Holds at the target once the duration has elapsed.
    pub fn sample(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_covers_endpoints() {
        let t = Transition::new(10.0, 20.0, Duration::from_millis(200), Easing::Linear);
        let start = t.started;

        assert_relative_eq!(t.sample(start), 10.0);
        assert_relative_eq!(t.sample(start + Duration::from_millis(100)), 15.0);
        assert_relative_eq!(t.sample(start + Duration::from_millis(200)), 20.0);
        // Holds past the end.
        assert_relative_eq!(t.sample(start + Duration::from_secs(5)), 20.0);
        assert!(t.is_done(start + Duration::from_millis(200)));
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let t = Transition::new(0.0, 7.0, Duration::ZERO, Easing::EaseOut);
        assert_relative_eq!(t.sample(t.started), 7.0);
        assert!(t.is_done(t.started));
    }

    #[test]
    fn easing_curves_pin_their_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
            // Out-of-range inputs clamp rather than extrapolate.
            assert_relative_eq!(easing.apply(-3.0), 0.0);
            assert_relative_eq!(easing.apply(2.0), 1.0);
        }
    }
}
