//! Keyframe types for the cursor and zoom timelines.
//!
//! Keyframes are derived values: they are recomputed whenever render
//! parameters change and are never persisted by this core.

use serde::{Deserialize, Serialize};

/// Progress-remapping function applied between two keyframes.
///
/// The remapping itself lives in the processing crate's shared easing
/// module; this enum is only the data tag selecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Linear,
    EaseInCubic,
    EaseOutCubic,
    #[default]
    EaseInOutCubic,
    EaseInOutQuad,
}

impl EasingKind {
    /// All kinds, for exhaustive property checks.
    pub const ALL: [EasingKind; 5] = [
        EasingKind::Linear,
        EasingKind::EaseInCubic,
        EasingKind::EaseOutCubic,
        EasingKind::EaseInOutCubic,
        EasingKind::EaseInOutQuad,
    ];
}

/// A cursor-position keyframe, as produced by the frame reducer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Milliseconds since recording start.
    pub time_ms: f64,
    pub x: f64,
    pub y: f64,
    pub easing: EasingKind,
}

impl Keyframe {
    pub fn new(time_ms: f64, x: f64, y: f64, easing: EasingKind) -> Self {
        Self {
            time_ms,
            x,
            y,
            easing,
        }
    }
}

/// A zoom/pan camera keyframe.
///
/// A zoom timeline always returns to rest (`zoom = 1.0`, centered) after
/// each pulse's hold elapses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomKeyframe {
    /// Milliseconds since recording start.
    pub time_ms: f64,
    /// Camera center X in pixels.
    pub x: f64,
    /// Camera center Y in pixels.
    pub y: f64,
    /// Zoom factor: 1.0 = no zoom, 2.0 = 200%.
    pub zoom: f64,
    pub easing: EasingKind,
}

impl ZoomKeyframe {
    pub fn new(time_ms: f64, x: f64, y: f64, zoom: f64, easing: EasingKind) -> Self {
        Self {
            time_ms,
            x,
            y,
            zoom,
            easing,
        }
    }

    /// A resting camera: no zoom, centered on the frame.
    pub fn rest(time_ms: f64, width: f64, height: f64) -> Self {
        Self::new(time_ms, width / 2.0, height / 2.0, 1.0, EasingKind::default())
    }
}
