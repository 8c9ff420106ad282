//! Zoom and render settings supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::cursor::CursorStyle;

/// How the zoom timeline is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// No zoom timeline.
    None,
    /// Pulse around each recorded click.
    #[default]
    #[serde(alias = "basic")]
    Clicks,
    /// Pulse around externally supplied focus points.
    #[serde(alias = "smart")]
    FocusPoints,
    /// Continuously track the cursor.
    Follow,
}

/// Zoom transition speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoomSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl ZoomSpeed {
    /// Duration of one zoom transition (in or out) in milliseconds.
    pub fn transition_duration_ms(self) -> f64 {
        match self {
            ZoomSpeed::Slow => 1000.0,
            ZoomSpeed::Medium => 600.0,
            ZoomSpeed::Fast => 300.0,
        }
    }
}

/// Zoom timeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    pub mode: ZoomMode,

    /// How strongly follow mode tracks the cursor: 0.0 keeps the camera
    /// centered, 1.0 tracks fully.
    pub follow_intensity: f64,

    /// Zoom applied to high-importance focus points.
    pub max_zoom: f64,

    /// Lower bound on any generated zoom.
    pub min_zoom: f64,

    /// Zoom applied to clicks and ordinary focus points.
    pub default_zoom: f64,

    pub speed: ZoomSpeed,

    /// How long the camera holds on a target after a pulse reaches it.
    pub hold_duration_ms: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            mode: ZoomMode::default(),
            follow_intensity: 0.5,
            max_zoom: 2.5,
            min_zoom: 1.0,
            default_zoom: 1.8,
            speed: ZoomSpeed::default(),
            hold_duration_ms: 1500.0,
        }
    }
}

/// An externally supplied (AI scene analysis) focus target for smart zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPoint {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since recording start.
    pub time_ms: f64,
    /// Importance score in [0, 1]; >= 0.8 pulls the camera to `max_zoom`.
    pub importance: f64,
    /// Per-point hold override; falls back to the settings value.
    pub hold_duration_ms: Option<f64>,
}

/// Render parameters for one output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output frame rate.
    pub fps: f64,
    /// Output frame width in pixels.
    pub width: f64,
    /// Output frame height in pixels.
    pub height: f64,
    pub cursor_style: CursorStyle,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fps: 60.0,
            width: 1920.0,
            height: 1080.0,
            cursor_style: CursorStyle::default(),
        }
    }
}

impl RenderSettings {
    /// Whether fps and dimensions are positive finite numbers.
    pub fn is_valid(&self) -> bool {
        self.fps.is_finite()
            && self.fps > 0.0
            && self.width.is_finite()
            && self.width > 0.0
            && self.height.is_finite()
            && self.height > 0.0
    }
}
