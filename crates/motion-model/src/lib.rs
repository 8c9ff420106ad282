//! Reelsmith Motion Model
//!
//! Defines the data contracts for the motion-synthesis core:
//! - **Trajectory:** Timestamped pointer samples and click events from capture
//! - **Keyframes:** Sparse animation anchors for cursor and zoom timelines
//! - **Cursor:** Cursor styles and their hotspot offsets
//! - **Settings:** Zoom and render parameters supplied by the caller
//!
//! All coordinates are in pixels of the capture/render frame; all timestamps
//! are fractional milliseconds since recording start. Capture sequences are
//! written once per session and are immutable afterward — everything derived
//! from them (keyframes, compiled expressions) is recomputed on demand and
//! carries no independent identity.

pub mod cursor;
pub mod keyframe;
pub mod settings;
pub mod trajectory;

pub use cursor::*;
pub use keyframe::*;
pub use settings::*;
pub use trajectory::*;
