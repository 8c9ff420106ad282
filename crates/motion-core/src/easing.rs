//! Progress-remapping (easing) functions.
//!
//! This is the single easing implementation shared by the cursor and zoom
//! pipelines. Both must remap progress identically or their motion drifts
//! apart visually, so easing is never reimplemented at a call site.

use reelsmith_motion_model::EasingKind;

/// Remap linear progress `t` in `[0, 1]` according to `kind`.
///
/// Input outside `[0, 1]` is clamped. Every kind maps 0 to 0 and 1 to 1
/// and is non-decreasing in between.
pub fn ease(kind: EasingKind, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        EasingKind::Linear => t,
        EasingKind::EaseInCubic => t * t * t,
        EasingKind::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        EasingKind::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        EasingKind::EaseInOutQuad => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}
