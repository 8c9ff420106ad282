//! Pointer trajectory types for the capture event log.
//!
//! The capture collaborator records events in append-only JSONL format.
//! Timestamps are fractional milliseconds since recording start, ordered
//! ascending with duplicates tolerated (high-rate capture can emit two
//! samples on the same millisecond). Coordinates are pixels of the capture
//! region.

use serde::{Deserialize, Serialize};

/// A single captured pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since recording start.
    #[serde(rename = "t")]
    pub time_ms: f64,
}

impl TemporalSample {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

/// A single captured click.
///
/// Clicks are a companion sequence: they are not required to align with any
/// pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since recording start.
    #[serde(rename = "t")]
    pub time_ms: f64,
}

impl ClickEvent {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

/// The immutable, time-ordered event log produced by one capture session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TemporalSample>,
    pub clicks: Vec<ClickEvent>,
}

impl Trajectory {
    /// Build a trajectory from raw sample and click sequences.
    pub fn new(samples: Vec<TemporalSample>, clicks: Vec<ClickEvent>) -> Self {
        Self { samples, clicks }
    }

    /// Build a trajectory from positions only (no clicks).
    pub fn from_samples(samples: Vec<TemporalSample>) -> Self {
        Self {
            samples,
            clicks: vec![],
        }
    }

    /// Total duration in milliseconds (0 for empty or single-sample logs
    /// starting at t=0).
    pub fn duration_ms(&self) -> f64 {
        self.samples.last().map(|s| s.time_ms).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether sample and click timestamps are ascending (duplicates allowed).
    pub fn is_time_ordered(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].time_ms <= w[1].time_ms)
            && self.clicks.windows(2).all(|w| w[0].time_ms <= w[1].time_ms)
    }

    /// Whether every coordinate and timestamp is a finite number.
    pub fn is_finite(&self) -> bool {
        self.samples
            .iter()
            .all(|s| s.x.is_finite() && s.y.is_finite() && s.time_ms.is_finite())
            && self
                .clicks
                .iter()
                .all(|c| c.x.is_finite() && c.y.is_finite() && c.time_ms.is_finite())
    }
}

/// One line of the capture log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CaptureEvent {
    Move {
        #[serde(rename = "t")]
        time_ms: f64,
        x: f64,
        y: f64,
    },
    Click {
        #[serde(rename = "t")]
        time_ms: f64,
        x: f64,
        y: f64,
    },
}

/// Parse a capture log from JSONL content (one JSON object per line).
///
/// Lines starting with `#` carry stream metadata and are skipped.
pub fn parse_capture_log(jsonl: &str) -> Result<Trajectory, serde_json::Error> {
    let mut trajectory = Trajectory::default();
    for line in jsonl.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match serde_json::from_str(line)? {
            CaptureEvent::Move { time_ms, x, y } => {
                trajectory.samples.push(TemporalSample::new(x, y, time_ms));
            }
            CaptureEvent::Click { time_ms, x, y } => {
                trajectory.clicks.push(ClickEvent::new(x, y, time_ms));
            }
        }
    }
    Ok(trajectory)
}

/// Serialize a trajectory back to JSONL, interleaved in time order.
pub fn serialize_capture_log(trajectory: &Trajectory) -> Result<String, serde_json::Error> {
    let mut events: Vec<CaptureEvent> = trajectory
        .samples
        .iter()
        .map(|s| CaptureEvent::Move {
            time_ms: s.time_ms,
            x: s.x,
            y: s.y,
        })
        .chain(trajectory.clicks.iter().map(|c| CaptureEvent::Click {
            time_ms: c.time_ms,
            x: c.x,
            y: c.y,
        }))
        .collect();
    events.sort_by(|a, b| event_time(a).total_cmp(&event_time(b)));

    let mut output = String::new();
    for event in &events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

fn event_time(event: &CaptureEvent) -> f64 {
    match event {
        CaptureEvent::Move { time_ms, .. } | CaptureEvent::Click { time_ms, .. } => *time_ms,
    }
}
