//! Reelsmith Motion Core
//!
//! Turns a discrete, noisy log of captured pointer movement into:
//! - **Spline:** a smooth, continuously-defined cursor trajectory
//! - **Sampler/Reducer:** bounded keyframe sets on the render frame grid
//! - **Expression:** compositor filter expressions for x(t)/y(t)
//! - **Zoom:** an independent zoom/pan camera keyframe timeline
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data. Every function is a
//! deterministic synchronous function over immutable input, safe to invoke
//! concurrently for independent render jobs.

pub mod easing;
pub mod expression;
pub mod pipeline;
pub mod reducer;
pub mod sampler;
pub mod spline;
pub mod zoom;

mod validate;

pub use expression::{compile_position, CompiledExpression};
pub use pipeline::{synthesize_cursor_motion, CursorMotion};
pub use sampler::{sample_frames, Frame};
pub use zoom::{compile_zoom, generate_zoom_timeline, zoom_at, ZoomState};
