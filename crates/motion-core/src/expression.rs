//! Compiles keyframe motion into compositor filter expressions.
//!
//! The external compositor accepts a small arithmetic micro-language for
//! time-varying filter parameters: `+ - * /`, `lt(a,b)` comparison, and
//! `if(cond,then,else)` conditional select, over the render-time variable
//! `t` in seconds. The compiler emits one conditional branch per keyframe
//! pair, with the unconditional fallback holding the final position, so
//! every conditional opened closes and the expression stays continuous over
//! `[0, last keyframe time]`.
//!
//! Expressions are parameterized by render-time seconds rather than frame
//! index, which decouples them from any particular output fps.

use serde::{Deserialize, Serialize};

use reelsmith_common::ReelsmithResult;
use reelsmith_motion_model::{HotspotOffset, Keyframe};

use crate::validate::{validate_dimensions, validate_keyframes};

/// Sentinel emitted for an empty keyframe set: a constant far enough
/// off-screen to disable the overlay at any realistic frame size.
pub const DISABLED_EXPR: &str = "-10000";

/// Smallest segment duration (seconds) emitted as a division denominator.
/// Keeps duplicate keyframe timestamps from producing a divide-by-zero
/// inside the compositor.
const MIN_SEGMENT_SECS: f64 = 1e-4;

/// Compiled x(t)/y(t) expressions for the overlay-position filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledExpression {
    pub x_expr: String,
    pub y_expr: String,
}

impl CompiledExpression {
    /// The disabled-overlay sentinel.
    pub fn disabled() -> Self {
        Self {
            x_expr: DISABLED_EXPR.to_string(),
            y_expr: DISABLED_EXPR.to_string(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.x_expr == DISABLED_EXPR && self.y_expr == DISABLED_EXPR
    }

    /// Length of the longer expression, in bytes.
    ///
    /// Compositor grammars enforce practical length/recursion limits; the
    /// caller compares this against its limit and falls back to
    /// frame-by-frame rendering rather than truncating, which would corrupt
    /// motion.
    pub fn max_len(&self) -> usize {
        self.x_expr.len().max(self.y_expr.len())
    }
}

/// Compile keyframes into position expressions.
///
/// Each keyframe coordinate is clamped into `[0, width]` / `[0, height]`
/// and offset by the cursor hotspot before emission, so evaluating the
/// result anywhere in range stays within `[-hotspot, frame dimension]`.
///
/// Zero keyframes compile to the disabled sentinel; a single keyframe
/// compiles to a constant with no conditional machinery. Unsorted or
/// non-finite keyframes are caller contract violations and fail fast.
pub fn compile_position(
    keyframes: &[Keyframe],
    hotspot: HotspotOffset,
    width: f64,
    height: f64,
) -> ReelsmithResult<CompiledExpression> {
    validate_dimensions(width, height)?;
    validate_keyframes(keyframes)?;

    if keyframes.is_empty() {
        return Ok(CompiledExpression::disabled());
    }

    let x_points: Vec<(f64, f64)> = keyframes
        .iter()
        .map(|k| (k.time_ms / 1000.0, k.x.clamp(0.0, width) - hotspot.x))
        .collect();
    let y_points: Vec<(f64, f64)> = keyframes
        .iter()
        .map(|k| (k.time_ms / 1000.0, k.y.clamp(0.0, height) - hotspot.y))
        .collect();

    let compiled = CompiledExpression {
        x_expr: compile_axis(&x_points),
        y_expr: compile_axis(&y_points),
    };

    tracing::debug!(
        keyframes = keyframes.len(),
        expr_len = compiled.max_len(),
        "Compiled position expression"
    );

    Ok(compiled)
}

/// Compile one axis from `(time_secs, value)` points.
///
/// Built back-to-front: the innermost fallback holds the final value, and
/// each earlier segment wraps it in one conditional.
fn compile_axis(points: &[(f64, f64)]) -> String {
    let (_, last_value) = *points.last().expect("points is non-empty");
    let mut expr = fmt_px(last_value);

    for pair in points.windows(2).rev() {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        expr = wrap_segment(t1, &linear_term(t0, t1, v0, v1), &expr);
    }

    expr
}

/// A linear interpolation term between `(t0, v0)` and `(t1, v1)`.
pub(crate) fn linear_term(t0: f64, t1: f64, v0: f64, v1: f64) -> String {
    let span = (t1 - t0).max(MIN_SEGMENT_SECS);
    format!(
        "{}+((t-{})/{})*({}-{})",
        fmt_px(v0),
        fmt_secs(t0),
        fmt_secs(span),
        fmt_px(v1),
        fmt_px(v0),
    )
}

/// Wrap a segment term: take it while `t` is before the segment end,
/// otherwise fall through to the rest of the expression.
pub(crate) fn wrap_segment(end_secs: f64, term: &str, rest: &str) -> String {
    format!("if(lt(t,{}),{},{})", fmt_secs(end_secs), term, rest)
}

/// Deterministic pixel/value formatting: two decimal places, no locale.
pub(crate) fn fmt_px(value: f64) -> String {
    // Avoid "-0.00" from tiny negative values.
    let value = if value.abs() < 5e-3 { 0.0 } else { value };
    format!("{value:.2}")
}

/// Deterministic time formatting: four decimal places of seconds.
pub(crate) fn fmt_secs(value: f64) -> String {
    format!("{value:.4}")
}
