//! Catmull-Rom spline interpolation over the captured trajectory.
//!
//! Raw pointer samples arrive in irregular bursts; linear interpolation
//! between them reads as mechanical stop-start motion. A Catmull-Rom spline
//! with eased local parameterization passes through every recorded sample
//! while accelerating and decelerating around it, which is what a human
//! hand looks like.

use reelsmith_motion_model::{EasingKind, TemporalSample};

use crate::easing::ease;

/// Smallest segment duration used as an interpolation denominator.
/// Duplicate timestamps would otherwise divide by zero.
const MIN_SEGMENT_MS: f64 = 1e-6;

/// Continuous cursor position at `time_ms`.
///
/// Never panics and never returns non-finite values for finite input:
/// an empty trajectory yields `(0, 0)`, a single sample yields that sample
/// for all t, and out-of-range queries degrade to the boundary positions so
/// a truncated capture log remains renderable.
pub fn position_at(samples: &[TemporalSample], time_ms: f64) -> (f64, f64) {
    let first = match samples.first() {
        Some(first) => first,
        None => return (0.0, 0.0),
    };
    if samples.len() == 1 {
        return (first.x, first.y);
    }

    // Segment [p1, p2] with p1.t <= time_ms < p2.t, clamped to the first or
    // final segment outside the recorded range.
    let upper = samples.partition_point(|s| s.time_ms <= time_ms);
    let i1 = upper.saturating_sub(1).min(samples.len() - 2);

    let p1 = &samples[i1];
    let p2 = &samples[i1 + 1];
    // Neighboring control points, clamped to the segment ends at the
    // sequence boundaries.
    let p0 = &samples[i1.saturating_sub(1)];
    let p3 = &samples[(i1 + 2).min(samples.len() - 1)];

    let span = (p2.time_ms - p1.time_ms).max(MIN_SEGMENT_MS);
    let u = ((time_ms - p1.time_ms) / span).clamp(0.0, 1.0);
    let u = ease(EasingKind::EaseInOutCubic, u);

    (
        catmull_rom(p0.x, p1.x, p2.x, p3.x, u),
        catmull_rom(p0.y, p1.y, p2.y, p3.y, u),
    )
}

/// Standard Catmull-Rom cubic basis; interpolates p1 at t=0 and p2 at t=1.
fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_path() -> Vec<TemporalSample> {
        vec![
            TemporalSample::new(0.0, 0.0, 0.0),
            TemporalSample::new(100.0, 0.0, 500.0),
            TemporalSample::new(100.0, 100.0, 1000.0),
        ]
    }

    #[test]
    fn test_empty_trajectory_is_origin() {
        assert_eq!(position_at(&[], 123.0), (0.0, 0.0));
    }

    #[test]
    fn test_single_sample_holds_everywhere() {
        let samples = vec![TemporalSample::new(42.0, 17.0, 300.0)];
        for t in [-100.0, 0.0, 300.0, 10_000.0] {
            assert_eq!(position_at(&samples, t), (42.0, 17.0));
        }
    }

    #[test]
    fn test_passes_through_recorded_samples() {
        let samples = sample_path();
        for sample in &samples {
            let (x, y) = position_at(&samples, sample.time_ms);
            assert!((x - sample.x).abs() < 1e-6, "x at t={}", sample.time_ms);
            assert!((y - sample.y).abs() < 1e-6, "y at t={}", sample.time_ms);
        }
    }

    #[test]
    fn test_midpoint_lies_between_neighbors() {
        let samples = sample_path();
        let (x, y) = position_at(&samples, 250.0);
        assert!(x > 0.0 && x < 100.0, "x={x} not strictly between");
        // The spline may overshoot slightly on y; it must stay near the segment.
        assert!(y.abs() < 30.0, "y={y} strayed from the segment");
    }

    #[test]
    fn test_out_of_range_degrades_to_boundaries() {
        let samples = sample_path();
        assert_eq!(position_at(&samples, -500.0), (0.0, 0.0));
        let (x, y) = position_at(&samples, 99_999.0);
        assert!((x - 100.0).abs() < 1e-6);
        assert!((y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_timestamps_stay_finite() {
        let samples = vec![
            TemporalSample::new(0.0, 0.0, 0.0),
            TemporalSample::new(50.0, 50.0, 200.0),
            TemporalSample::new(60.0, 60.0, 200.0),
            TemporalSample::new(100.0, 100.0, 400.0),
        ];
        for t in [0.0, 100.0, 199.9, 200.0, 200.1, 300.0, 400.0] {
            let (x, y) = position_at(&samples, t);
            assert!(x.is_finite() && y.is_finite(), "non-finite at t={t}");
        }
    }

    proptest! {
        // Continuity: a tiny step in t moves the position a bounded amount.
        #[test]
        fn prop_position_is_continuous(t in 0.0..1000.0f64) {
            let samples = sample_path();
            let (x0, y0) = position_at(&samples, t);
            let (x1, y1) = position_at(&samples, t + 0.01);
            let step = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            prop_assert!(step < 1.0, "jump of {step}px over 0.01ms at t={t}");
        }

        #[test]
        fn prop_never_non_finite(t in -10_000.0..10_000.0f64) {
            let samples = sample_path();
            let (x, y) = position_at(&samples, t);
            prop_assert!(x.is_finite() && y.is_finite());
        }
    }
}
