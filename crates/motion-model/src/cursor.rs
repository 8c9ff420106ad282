//! Cursor styles and hotspot geometry.
//!
//! The overlay icon's bounding box is positioned by subtracting the style's
//! hotspot from the interpolated pointer position, so the icon's "true"
//! pointer point lands exactly on the trajectory. The style set is a closed
//! enum dispatched through a match, so adding a style without a hotspot is
//! a compile error.

use serde::{Deserialize, Serialize};

/// Pixel offset within a cursor icon's bounding box marking its true
/// pointer location. Constant once a style is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotspotOffset {
    pub x: f64,
    pub y: f64,
}

impl HotspotOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Available cursor overlay styles.
///
/// All icons share a nominal 32x32 bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    /// Standard arrow; pointer point is the tip near the top-left.
    #[default]
    Arrow,
    /// Hand/pointer icon; pointer point is the fingertip.
    Pointer,
    /// Filled dot; radially symmetric, pointer point is the center.
    Dot,
    /// Crosshair; pointer point is the center.
    Crosshair,
}

impl CursorStyle {
    /// Nominal icon bounding box edge in pixels.
    pub const ICON_SIZE: f64 = 32.0;

    /// The hotspot for this style.
    pub fn hotspot(self) -> HotspotOffset {
        match self {
            CursorStyle::Arrow => HotspotOffset::new(8.0, 5.0),
            CursorStyle::Pointer => HotspotOffset::new(11.0, 4.0),
            CursorStyle::Dot => HotspotOffset::new(16.0, 16.0),
            CursorStyle::Crosshair => HotspotOffset::new(16.0, 16.0),
        }
    }

    /// All styles, for exhaustive checks.
    pub const ALL: [CursorStyle; 4] = [
        CursorStyle::Arrow,
        CursorStyle::Pointer,
        CursorStyle::Dot,
        CursorStyle::Crosshair,
    ];
}
