//! End-to-end cursor motion synthesis.
//!
//! Wires the stages together in their one-way flow: trajectory -> spline ->
//! frame samples -> reduced keyframes -> compiled expression. Collaborators
//! that rasterize frame-by-frame (multi-pulse zoom, click ripples) consume
//! the raw frames; the compositor consumes the expressions.

use reelsmith_common::{ReelsmithError, ReelsmithResult};
use reelsmith_motion_model::{Keyframe, RenderSettings, Trajectory};

use crate::expression::{compile_position, CompiledExpression};
use crate::reducer::reduce_frames;
use crate::sampler::{sample_frames, Frame};

/// Everything the cursor pipeline produces for one render job.
#[derive(Debug, Clone)]
pub struct CursorMotion {
    /// Dense per-frame samples, for frame-by-frame collaborators.
    pub frames: Vec<Frame>,
    /// The reduced keyframe set the expression was compiled from.
    pub keyframes: Vec<Keyframe>,
    /// Position expressions for the compositor's overlay filter.
    pub expression: CompiledExpression,
}

/// Run the full cursor pipeline for one render job.
pub fn synthesize_cursor_motion(
    trajectory: &Trajectory,
    settings: &RenderSettings,
    keyframe_density_per_sec: f64,
) -> ReelsmithResult<CursorMotion> {
    if !settings.is_valid() {
        return Err(ReelsmithError::invalid_input(format!(
            "render settings must have positive finite fps and dimensions, got {settings:?}"
        )));
    }

    let frames = sample_frames(trajectory, settings.fps)?;
    let keyframes = reduce_frames(&frames, settings.fps, keyframe_density_per_sec)?;
    let expression = compile_position(
        &keyframes,
        settings.cursor_style.hotspot(),
        settings.width,
        settings.height,
    )?;

    Ok(CursorMotion {
        frames,
        keyframes,
        expression,
    })
}
