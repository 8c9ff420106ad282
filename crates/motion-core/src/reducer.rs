//! Downsamples dense per-frame data to a bounded keyframe set.
//!
//! The expression compiler emits one conditional branch per keyframe pair,
//! and compositor expression grammars have practical length and recursion
//! limits. A 30s clip at 60fps is 1800 frames — far too many to compile
//! directly — so frames are strided down to a target density per second.
//! Output size is O(duration x density), independent of fps.

use reelsmith_common::ReelsmithResult;
use reelsmith_motion_model::{EasingKind, Keyframe};

use crate::sampler::Frame;
use crate::validate::validate_positive;

/// Keyframe density that keeps compiled expressions comfortably inside
/// common compositor limits.
pub const DEFAULT_KEYFRAME_DENSITY_PER_SEC: f64 = 2.0;

/// Stride frames down to roughly `target_density_per_sec` keyframes.
///
/// The true final frame is always appended, even off-stride, so compiled
/// motion ends exactly at the recorded endpoint instead of drifting short.
/// Fewer than 2 resulting keyframes signals the caller to compile a static
/// expression instead of a piecewise one.
pub fn reduce_frames(
    frames: &[Frame],
    fps: f64,
    target_density_per_sec: f64,
) -> ReelsmithResult<Vec<Keyframe>> {
    validate_positive("fps", fps)?;
    validate_positive("target keyframe density", target_density_per_sec)?;

    if frames.is_empty() {
        return Ok(vec![]);
    }

    let stride = ((fps / target_density_per_sec).floor() as usize).max(1);

    let mut keyframes: Vec<Keyframe> = frames
        .iter()
        .step_by(stride)
        .map(keyframe_from_frame)
        .collect();

    let last = frames.last().expect("frames is non-empty");
    if keyframes
        .last()
        .map(|k| k.time_ms < last.time_ms)
        .unwrap_or(true)
    {
        keyframes.push(keyframe_from_frame(last));
    }

    tracing::debug!(
        frames = frames.len(),
        keyframes = keyframes.len(),
        stride,
        "Reduced frame samples to keyframes"
    );

    Ok(keyframes)
}

// Compiled segments interpolate linearly between keyframes, so the easing
// tag is Linear regardless of how the underlying spline was parameterized.
fn keyframe_from_frame(frame: &Frame) -> Keyframe {
    Keyframe::new(frame.time_ms, frame.x, frame.y, EasingKind::Linear)
}
