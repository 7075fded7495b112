//! Time-based difficulty curve
//!
//! Difficulty is never stored: it is recomputed from elapsed game time every
//! tick. Both outputs grow linearly and stop at their caps.

use crate::tuning::DifficultyTuning;

/// Difficulty at a given moment of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Probability of spawning one obstacle this tick
    pub spawn_rate: f32,
    /// Base fall speed for new obstacles (units per tick)
    pub speed: f32,
}

impl Difficulty {
    /// Evaluate the curve at `elapsed_secs` seconds into the run
    pub fn at(elapsed_secs: f32, tuning: &DifficultyTuning) -> Self {
        Self {
            spawn_rate: spawn_rate(elapsed_secs, tuning),
            speed: speed(elapsed_secs, tuning),
        }
    }
}

/// `min(base * (1 + t / ramp), max)`
#[inline]
pub fn spawn_rate(elapsed_secs: f32, tuning: &DifficultyTuning) -> f32 {
    let t = elapsed_secs.max(0.0);
    (tuning.base_spawn_rate * (1.0 + t / tuning.spawn_ramp_secs)).min(tuning.max_spawn_rate)
}

/// `min(base * (1 + t / ramp), max)`
#[inline]
pub fn speed(elapsed_secs: f32, tuning: &DifficultyTuning) -> f32 {
    let t = elapsed_secs.max(0.0);
    (tuning.base_speed * (1.0 + t / tuning.speed_ramp_secs)).min(tuning.max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_start_values_are_exact() {
        let tuning = DifficultyTuning::default();
        let d = Difficulty::at(0.0, &tuning);
        assert_eq!(d.spawn_rate, 0.02);
        assert_eq!(d.speed, 2.0);
    }

    #[test]
    fn test_ramp_midpoints() {
        let tuning = DifficultyTuning::default();
        // 30s doubles the spawn rate, 20s doubles the speed
        assert!((spawn_rate(30.0, &tuning) - 0.04).abs() < 1e-6);
        assert!((speed(20.0, &tuning) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_caps_reached() {
        let tuning = DifficultyTuning::default();
        // spawn rate caps at t = 90s, speed at t = 60s
        assert_eq!(spawn_rate(90.0, &tuning), 0.08);
        assert_eq!(spawn_rate(10_000.0, &tuning), 0.08);
        assert_eq!(speed(60.0, &tuning), 8.0);
        assert_eq!(speed(10_000.0, &tuning), 8.0);
    }

    proptest! {
        #[test]
        fn prop_spawn_rate_monotone_and_capped(a in 0.0f32..10_000.0, b in 0.0f32..10_000.0) {
            let tuning = DifficultyTuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(spawn_rate(lo, &tuning) <= spawn_rate(hi, &tuning));
            prop_assert!(spawn_rate(hi, &tuning) <= 0.08);
        }

        #[test]
        fn prop_speed_monotone_and_capped(a in 0.0f32..10_000.0, b in 0.0f32..10_000.0) {
            let tuning = DifficultyTuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(speed(lo, &tuning) <= speed(hi, &tuning));
            prop_assert!(speed(hi, &tuning) <= 8.0);
        }
    }
}
