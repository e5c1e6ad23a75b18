use std::time::Duration;

use crate::constants::{WHEEL_ANIMATION_DELAY_MS, WHEEL_ANIMATION_DURATION_MS};

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Fast start, long soft landing.
    pub const SPIN: CubicBezier = CubicBezier { x1: 0.25, y1: 0.46, x2: 0.45, y2: 0.94 };

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-7 {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled; x(t) is monotonic for x1, x2 in [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x`, both in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// The spin timing curve applied to linear progress.
pub fn ease(x: f64) -> f64 {
    CubicBezier::SPIN.ease(x)
}

/// Visual interpolation between two cumulative rotations.
///
/// Works on elapsed time rather than a clock so callers own the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub reveal_delay: Duration,
    pub curve: CubicBezier,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration: Duration::from_millis(WHEEL_ANIMATION_DURATION_MS),
            reveal_delay: Duration::from_millis(WHEEL_ANIMATION_DELAY_MS),
            curve: CubicBezier::SPIN,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, elapsed: Duration) -> f64 {
        let eased = self.curve.ease(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The winner is announced a moment after the wheel stops.
    pub fn is_revealed(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration + self.reveal_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        let curve = CubicBezier::SPIN;
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-3.0), 0.0);
        assert_eq!(curve.ease(4.0), 1.0);
    }

    #[test]
    fn test_ease_is_monotonic_and_front_loaded() {
        let curve = CubicBezier::SPIN;
        let mut previous = 0.0;
        for step in 1..=100 {
            let x = step as f64 / 100.0;
            let y = curve.ease(x);
            assert!(y + 1e-9 >= previous, "not monotonic at {}", x);
            previous = y;
        }
        // Decelerating curve: more than half the distance in the first half.
        assert!(curve.ease(0.5) > 0.6);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };
        for step in 0..=10 {
            let x = step as f64 / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_spin_interpolates_between_rotations() {
        let spin = SpinAnimation::new(10.0, 2125.0);
        assert_eq!(spin.angle_at(Duration::ZERO), 10.0);
        assert_eq!(spin.angle_at(Duration::from_secs(4)), 2125.0);
        assert_eq!(spin.angle_at(Duration::from_secs(60)), 2125.0);

        let middle = spin.angle_at(Duration::from_secs(2));
        assert!(middle > 10.0 && middle < 2125.0);
    }

    #[test]
    fn test_reveal_waits_for_delay() {
        let spin = SpinAnimation::new(0.0, 1800.0);
        assert!(!spin.is_settled(Duration::from_millis(3999)));
        assert!(spin.is_settled(Duration::from_millis(4000)));
        assert!(!spin.is_revealed(Duration::from_millis(4200)));
        assert!(spin.is_revealed(Duration::from_millis(4500)));
    }
}
