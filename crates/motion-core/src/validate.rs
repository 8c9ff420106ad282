//! Input validation for public entry points.
//!
//! Malformed input (unsorted timestamps, non-finite coordinates,
//! non-positive rates or dimensions) is reported as a distinct
//! invalid-input error instead of propagating as silent numeric corruption.
//! Degenerate-but-well-formed input (empty or single-sample trajectories)
//! is not an error.

use reelsmith_common::{ReelsmithError, ReelsmithResult};
use reelsmith_motion_model::{Keyframe, Trajectory, ZoomKeyframe};

pub(crate) fn validate_trajectory(trajectory: &Trajectory) -> ReelsmithResult<()> {
    if !trajectory.is_finite() {
        return Err(ReelsmithError::invalid_input(
            "trajectory contains non-finite coordinates or timestamps",
        ));
    }
    if !trajectory.is_time_ordered() {
        return Err(ReelsmithError::invalid_input(
            "trajectory timestamps are not ascending",
        ));
    }
    Ok(())
}

pub(crate) fn validate_positive(name: &str, value: f64) -> ReelsmithResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ReelsmithError::invalid_input(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_dimensions(width: f64, height: f64) -> ReelsmithResult<()> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(ReelsmithError::invalid_input(format!(
            "frame dimensions must be positive finite numbers, got {width}x{height}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_keyframes(keyframes: &[Keyframe]) -> ReelsmithResult<()> {
    let finite = keyframes
        .iter()
        .all(|k| k.time_ms.is_finite() && k.x.is_finite() && k.y.is_finite());
    if !finite {
        return Err(ReelsmithError::invalid_input(
            "keyframes contain non-finite values",
        ));
    }
    let ordered = keyframes.windows(2).all(|w| w[0].time_ms <= w[1].time_ms);
    if !ordered {
        return Err(ReelsmithError::invalid_input(
            "keyframes are not time-ordered",
        ));
    }
    Ok(())
}

pub(crate) fn validate_zoom_keyframes(keyframes: &[ZoomKeyframe]) -> ReelsmithResult<()> {
    let finite = keyframes.iter().all(|k| {
        k.time_ms.is_finite() && k.x.is_finite() && k.y.is_finite() && k.zoom.is_finite()
    });
    if !finite {
        return Err(ReelsmithError::invalid_input(
            "zoom keyframes contain non-finite values",
        ));
    }
    let ordered = keyframes.windows(2).all(|w| w[0].time_ms <= w[1].time_ms);
    if !ordered {
        return Err(ReelsmithError::invalid_input(
            "zoom keyframes are not time-ordered",
        ));
    }
    Ok(())
}
