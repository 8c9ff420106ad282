//! Discretizes the continuous trajectory onto a render frame grid.

use serde::{Deserialize, Serialize};

use reelsmith_common::ReelsmithResult;
use reelsmith_motion_model::Trajectory;

use crate::spline::position_at;
use crate::validate::{validate_positive, validate_trajectory};

/// How close (in ms) a frame must be to a click to count as click-adjacent.
///
/// ±100ms balances perceived click/visual sync against the misalignment
/// between the capture clock and the render frame grid.
pub const CLICK_PROXIMITY_MS: f64 = 100.0;

/// One rendered frame's worth of cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: usize,
    /// Frame presentation time in milliseconds.
    pub time_ms: f64,
    pub x: f64,
    pub y: f64,
    /// Whether any click falls within [`CLICK_PROXIMITY_MS`] of this frame.
    pub click_nearby: bool,
    /// Instantaneous speed, from the distance to the previous frame.
    pub velocity_px_per_sec: f64,
}

/// Evaluate the spline at every output frame time.
///
/// Produces `ceil(duration_ms / 1000 * fps)` frame intervals, inclusive of
/// both endpoints; the final frame is clamped to the recorded endpoint so
/// downstream keyframes end exactly where the capture did instead of
/// drifting short of it. An empty trajectory yields an empty vec.
pub fn sample_frames(trajectory: &Trajectory, fps: f64) -> ReelsmithResult<Vec<Frame>> {
    validate_positive("fps", fps)?;
    validate_trajectory(trajectory)?;

    if trajectory.is_empty() {
        return Ok(vec![]);
    }

    let duration_ms = trajectory.duration_ms();
    let frame_interval_ms = 1000.0 / fps;
    let frame_count = (duration_ms / 1000.0 * fps).ceil() as usize;

    let mut frames = Vec::with_capacity(frame_count + 1);
    let mut prev: Option<(f64, f64)> = None;

    for index in 0..=frame_count {
        let time_ms = (index as f64 * frame_interval_ms).min(duration_ms);
        let (x, y) = position_at(&trajectory.samples, time_ms);

        let click_nearby = trajectory
            .clicks
            .iter()
            .any(|c| (c.time_ms - time_ms).abs() <= CLICK_PROXIMITY_MS);

        let velocity_px_per_sec = match prev {
            Some((px, py)) => {
                let dist = ((x - px).powi(2) + (y - py).powi(2)).sqrt();
                dist / (frame_interval_ms / 1000.0)
            }
            None => 0.0,
        };
        prev = Some((x, y));

        frames.push(Frame {
            index,
            time_ms,
            x,
            y,
            click_nearby,
            velocity_px_per_sec,
        });
    }

    Ok(frames)
}
