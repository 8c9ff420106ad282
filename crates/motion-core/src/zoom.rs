//! Zoom/pan camera keyframe generation.
//!
//! Independent of the cursor pipeline: clicks or externally supplied focus
//! points drive discrete zoom pulses, or follow mode tracks the cursor
//! continuously. A pulse is four keyframes — transition to the target zoom,
//! hold, transition back to rest — and the timeline always returns to rest
//! after each hold elapses.

use reelsmith_common::{ReelsmithError, ReelsmithResult};
use reelsmith_motion_model::{
    EasingKind, FocusPoint, Trajectory, ZoomKeyframe, ZoomMode, ZoomSettings,
};

use crate::easing::ease;
use crate::expression::{fmt_px, linear_term, wrap_segment};
use crate::spline::position_at;
use crate::validate::{validate_dimensions, validate_trajectory, validate_zoom_keyframes};

/// Sampling cadence for follow mode.
const FOLLOW_INTERVAL_MS: f64 = 100.0;

/// Smallest keyframe span used as an interpolation denominator.
const MIN_SPAN_MS: f64 = 1e-6;

/// Camera state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub zoom: f64,
    /// Camera center X in pixels.
    pub x: f64,
    /// Camera center Y in pixels.
    pub y: f64,
}

/// Generate the zoom keyframe timeline for the configured mode.
///
/// `Clicks` pulses around each recorded click, `FocusPoints` around each
/// supplied focus point (importance >= 0.8 pulls `max_zoom`), `Follow`
/// tracks the cursor continuously, `None` yields no keyframes.
///
/// Closely spaced clicks can produce overlapping, unmerged pulses; whether
/// to merge them into one continuous hold is an open product decision, so
/// overlaps are logged and left unmerged. The returned timeline is always
/// sorted by time, so [`zoom_at`] and [`compile_zoom`] accept it as-is even
/// when pulses interleave.
pub fn generate_zoom_timeline(
    settings: &ZoomSettings,
    trajectory: &Trajectory,
    focus_points: &[FocusPoint],
    width: f64,
    height: f64,
) -> ReelsmithResult<Vec<ZoomKeyframe>> {
    validate_dimensions(width, height)?;
    validate_trajectory(trajectory)?;
    validate_focus_points(focus_points)?;

    let transition_ms = settings.speed.transition_duration_ms();
    let default_zoom = settings
        .default_zoom
        .clamp(settings.min_zoom, settings.max_zoom);

    let keyframes = match settings.mode {
        ZoomMode::None => vec![],

        ZoomMode::Clicks => {
            let mut keyframes = Vec::with_capacity(trajectory.clicks.len() * 4);
            for click in &trajectory.clicks {
                push_pulse(
                    &mut keyframes,
                    click.x,
                    click.y,
                    click.time_ms,
                    default_zoom,
                    settings.hold_duration_ms,
                    transition_ms,
                    width,
                    height,
                );
            }
            keyframes
        }

        ZoomMode::FocusPoints => {
            let mut keyframes = Vec::with_capacity(focus_points.len() * 4);
            for point in focus_points {
                let zoom = if point.importance >= 0.8 {
                    settings.max_zoom
                } else {
                    default_zoom
                };
                let hold_ms = point.hold_duration_ms.unwrap_or(settings.hold_duration_ms);
                push_pulse(
                    &mut keyframes,
                    point.x,
                    point.y,
                    point.time_ms,
                    zoom,
                    hold_ms,
                    transition_ms,
                    width,
                    height,
                );
            }
            keyframes
        }

        ZoomMode::Follow => follow_timeline(settings, trajectory, width, height, default_zoom),
    };

    // Overlapping pulses interleave their keyframes; downstream consumers
    // require an ascending timeline.
    let mut keyframes = keyframes;
    keyframes.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));

    tracing::debug!(
        mode = ?settings.mode,
        keyframes = keyframes.len(),
        "Generated zoom timeline"
    );

    Ok(keyframes)
}

/// Camera state at `time_ms`, interpolated between the surrounding
/// keyframes with the later keyframe's easing. `None` for an empty
/// timeline (camera at rest is the caller's default).
pub fn zoom_at(keyframes: &[ZoomKeyframe], time_ms: f64) -> Option<ZoomState> {
    let first = keyframes.first()?;
    if time_ms <= first.time_ms {
        return Some(state_of(first));
    }
    let last = keyframes.last().expect("non-empty");
    if time_ms >= last.time_ms {
        return Some(state_of(last));
    }

    let upper = keyframes.partition_point(|k| k.time_ms <= time_ms);
    let i = upper.saturating_sub(1).min(keyframes.len() - 2);
    let k0 = &keyframes[i];
    let k1 = &keyframes[i + 1];

    let span = (k1.time_ms - k0.time_ms).max(MIN_SPAN_MS);
    let progress = ((time_ms - k0.time_ms) / span).clamp(0.0, 1.0);
    let eased = ease(k1.easing, progress);

    Some(ZoomState {
        zoom: k0.zoom + (k1.zoom - k0.zoom) * eased,
        x: k0.x + (k1.x - k0.x) * eased,
        y: k0.y + (k1.y - k0.y) * eased,
    })
}

/// A compiled zoom expression for the compositor's scale parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomExpression {
    pub zoom_expr: String,
}

impl ZoomExpression {
    pub fn len(&self) -> usize {
        self.zoom_expr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zoom_expr.is_empty()
    }
}

/// Compile the zoom timeline into a compositor expression.
///
/// Known simplification, preserved deliberately: only the first and last
/// keyframe are honored — the expression interpolates linearly between
/// them and intermediate pulses are discarded. Callers that need
/// multi-pulse zoom render it frame-by-frame from [`zoom_at`] instead.
/// Extending this to full piecewise compilation through the position
/// compiler's machinery is a tracked enhancement.
pub fn compile_zoom(keyframes: &[ZoomKeyframe]) -> ReelsmithResult<ZoomExpression> {
    validate_zoom_keyframes(keyframes)?;

    let zoom_expr = match keyframes {
        [] => fmt_px(1.0),
        [only] => fmt_px(only.zoom),
        [first, .., last] => {
            let term = linear_term(
                first.time_ms / 1000.0,
                last.time_ms / 1000.0,
                first.zoom,
                last.zoom,
            );
            wrap_segment(last.time_ms / 1000.0, &term, &fmt_px(last.zoom))
        }
    };

    Ok(ZoomExpression { zoom_expr })
}

#[allow(clippy::too_many_arguments)]
fn push_pulse(
    keyframes: &mut Vec<ZoomKeyframe>,
    cx: f64,
    cy: f64,
    time_ms: f64,
    zoom: f64,
    hold_ms: f64,
    transition_ms: f64,
    width: f64,
    height: f64,
) {
    let start_ms = (time_ms - transition_ms).max(0.0);

    if let Some(prev_end) = keyframes.last().map(|k| k.time_ms) {
        if start_ms < prev_end {
            tracing::debug!(
                pulse_start_ms = start_ms,
                previous_end_ms = prev_end,
                "Zoom pulses overlap; leaving unmerged"
            );
        }
    }

    keyframes.push(ZoomKeyframe::rest(start_ms, width, height));
    keyframes.push(ZoomKeyframe::new(
        time_ms,
        cx,
        cy,
        zoom,
        EasingKind::EaseInOutCubic,
    ));
    keyframes.push(ZoomKeyframe::new(
        time_ms + hold_ms,
        cx,
        cy,
        zoom,
        EasingKind::Linear,
    ));
    keyframes.push(ZoomKeyframe::rest(
        time_ms + hold_ms + transition_ms,
        width,
        height,
    ));
}

/// Continuous (non-pulsed) cursor tracking.
///
/// `follow_intensity` blends between a centered camera (0.0) and full
/// tracking (1.0); zoom scales with the same intensity so a barely-tracking
/// camera does not crop hard against the frame edges.
fn follow_timeline(
    settings: &ZoomSettings,
    trajectory: &Trajectory,
    width: f64,
    height: f64,
    default_zoom: f64,
) -> Vec<ZoomKeyframe> {
    if trajectory.is_empty() {
        return vec![];
    }

    let intensity = settings.follow_intensity.clamp(0.0, 1.0);
    let (cx, cy) = (width / 2.0, height / 2.0);
    let zoom = (1.0 + (default_zoom - 1.0) * intensity)
        .clamp(settings.min_zoom, settings.max_zoom);

    let duration_ms = trajectory.duration_ms();
    let steps = (duration_ms / FOLLOW_INTERVAL_MS).ceil() as usize;

    let mut keyframes = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let time_ms = (step as f64 * FOLLOW_INTERVAL_MS).min(duration_ms);
        let (px, py) = position_at(&trajectory.samples, time_ms);
        keyframes.push(ZoomKeyframe::new(
            time_ms,
            cx + (px - cx) * intensity,
            cy + (py - cy) * intensity,
            zoom,
            EasingKind::Linear,
        ));
    }

    keyframes
}

fn state_of(keyframe: &ZoomKeyframe) -> ZoomState {
    ZoomState {
        zoom: keyframe.zoom,
        x: keyframe.x,
        y: keyframe.y,
    }
}

fn validate_focus_points(focus_points: &[FocusPoint]) -> ReelsmithResult<()> {
    let finite = focus_points.iter().all(|p| {
        p.x.is_finite() && p.y.is_finite() && p.time_ms.is_finite() && p.importance.is_finite()
    });
    if !finite {
        return Err(ReelsmithError::invalid_input(
            "focus points contain non-finite values",
        ));
    }
    let ordered = focus_points.windows(2).all(|w| w[0].time_ms <= w[1].time_ms);
    if !ordered {
        return Err(ReelsmithError::invalid_input(
            "focus points are not time-ordered",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelsmith_motion_model::{ClickEvent, TemporalSample, ZoomSpeed};

    const WIDTH: f64 = 1920.0;
    const HEIGHT: f64 = 1080.0;

    fn click_trajectory(clicks: Vec<ClickEvent>) -> Trajectory {
        Trajectory::new(
            vec![
                TemporalSample::new(0.0, 0.0, 0.0),
                TemporalSample::new(500.0, 500.0, 5000.0),
            ],
            clicks,
        )
    }

    fn settings(mode: ZoomMode) -> ZoomSettings {
        ZoomSettings {
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_none_mode_yields_empty_timeline() {
        let trajectory = click_trajectory(vec![ClickEvent::new(100.0, 100.0, 1000.0)]);
        let keyframes =
            generate_zoom_timeline(&settings(ZoomMode::None), &trajectory, &[], WIDTH, HEIGHT)
                .unwrap();
        assert!(keyframes.is_empty());
    }

    #[test]
    fn test_no_clicks_yields_empty_timeline() {
        let trajectory = click_trajectory(vec![]);
        let keyframes =
            generate_zoom_timeline(&settings(ZoomMode::Clicks), &trajectory, &[], WIDTH, HEIGHT)
                .unwrap();
        assert!(keyframes.is_empty());
    }

    #[test]
    fn test_click_pulse_timing() {
        // Medium speed = 600ms transitions; hold = 1500ms.
        let trajectory = click_trajectory(vec![ClickEvent::new(300.0, 200.0, 2000.0)]);
        let config = ZoomSettings {
            mode: ZoomMode::Clicks,
            speed: ZoomSpeed::Medium,
            hold_duration_ms: 1500.0,
            ..Default::default()
        };

        let keyframes = generate_zoom_timeline(&config, &trajectory, &[], WIDTH, HEIGHT).unwrap();
        let times: Vec<f64> = keyframes.iter().map(|k| k.time_ms).collect();
        assert_eq!(times, vec![1400.0, 2000.0, 3500.0, 4100.0]);

        // Rest, target, target, rest.
        assert_eq!(keyframes[0].zoom, 1.0);
        assert_eq!(keyframes[1].zoom, config.default_zoom);
        assert_eq!(keyframes[2].zoom, config.default_zoom);
        assert_eq!(keyframes[3].zoom, 1.0);
        assert_eq!((keyframes[1].x, keyframes[1].y), (300.0, 200.0));
    }

    #[test]
    fn test_overlapping_pulses_stay_consumable() {
        // Two clicks 1s apart overlap at default speeds (600ms transition,
        // 1500ms hold); the pulses stay unmerged but the timeline must
        // remain time-ordered so its own consumers accept it.
        let trajectory = click_trajectory(vec![
            ClickEvent::new(100.0, 100.0, 1000.0),
            ClickEvent::new(200.0, 200.0, 2000.0),
        ]);
        let keyframes =
            generate_zoom_timeline(&settings(ZoomMode::Clicks), &trajectory, &[], WIDTH, HEIGHT)
                .unwrap();

        assert_eq!(keyframes.len(), 8);
        assert!(
            keyframes.windows(2).all(|w| w[0].time_ms <= w[1].time_ms),
            "timeline not ascending: {:?}",
            keyframes.iter().map(|k| k.time_ms).collect::<Vec<_>>()
        );

        let compiled = compile_zoom(&keyframes).unwrap();
        assert!(!compiled.zoom_expr.is_empty());

        let at_second_click = zoom_at(&keyframes, 2000.0).unwrap();
        assert!(at_second_click.zoom > 1.0);
    }

    #[test]
    fn test_pulse_start_clamps_to_zero() {
        let trajectory = click_trajectory(vec![ClickEvent::new(300.0, 200.0, 100.0)]);
        let keyframes =
            generate_zoom_timeline(&settings(ZoomMode::Clicks), &trajectory, &[], WIDTH, HEIGHT)
                .unwrap();
        assert_eq!(keyframes[0].time_ms, 0.0);
    }

    #[test]
    fn test_focus_importance_selects_zoom_level() {
        let trajectory = click_trajectory(vec![]);
        let config = settings(ZoomMode::FocusPoints);
        let points = [
            FocusPoint {
                x: 100.0,
                y: 100.0,
                time_ms: 2000.0,
                importance: 0.5,
                hold_duration_ms: None,
            },
            FocusPoint {
                x: 800.0,
                y: 400.0,
                time_ms: 10_000.0,
                importance: 0.9,
                hold_duration_ms: Some(500.0),
            },
        ];

        let keyframes =
            generate_zoom_timeline(&config, &trajectory, &points, WIDTH, HEIGHT).unwrap();
        assert_eq!(keyframes.len(), 8);
        assert_eq!(keyframes[1].zoom, config.default_zoom);
        assert_eq!(keyframes[5].zoom, config.max_zoom);
        // Per-point hold override: 10_000 + 500 for the hold end.
        assert_eq!(keyframes[6].time_ms, 10_500.0);
    }

    #[test]
    fn test_follow_intensity_zero_keeps_camera_centered() {
        let trajectory = click_trajectory(vec![]);
        let config = ZoomSettings {
            mode: ZoomMode::Follow,
            follow_intensity: 0.0,
            ..Default::default()
        };

        let keyframes = generate_zoom_timeline(&config, &trajectory, &[], WIDTH, HEIGHT).unwrap();
        assert!(!keyframes.is_empty());
        for keyframe in &keyframes {
            assert_eq!((keyframe.x, keyframe.y), (WIDTH / 2.0, HEIGHT / 2.0));
            assert_eq!(keyframe.zoom, 1.0);
        }
    }

    #[test]
    fn test_follow_full_intensity_tracks_cursor() {
        let trajectory = click_trajectory(vec![]);
        let config = ZoomSettings {
            mode: ZoomMode::Follow,
            follow_intensity: 1.0,
            ..Default::default()
        };

        let keyframes = generate_zoom_timeline(&config, &trajectory, &[], WIDTH, HEIGHT).unwrap();
        let first = keyframes.first().unwrap();
        let last = keyframes.last().unwrap();
        assert_eq!((first.x, first.y), (0.0, 0.0));
        assert!((last.x - 500.0).abs() < 1e-6);
        assert_eq!(last.time_ms, trajectory.duration_ms());
    }

    #[test]
    fn test_zoom_at_empty_timeline() {
        assert!(zoom_at(&[], 1000.0).is_none());
    }

    #[test]
    fn test_zoom_at_hits_keyframes_and_eases_between() {
        let keyframes = vec![
            ZoomKeyframe::rest(0.0, WIDTH, HEIGHT),
            ZoomKeyframe::new(1000.0, 300.0, 200.0, 2.0, EasingKind::EaseInOutCubic),
        ];

        let at_start = zoom_at(&keyframes, 0.0).unwrap();
        assert_eq!(at_start.zoom, 1.0);

        let at_end = zoom_at(&keyframes, 1000.0).unwrap();
        assert_eq!(at_end.zoom, 2.0);
        assert_eq!((at_end.x, at_end.y), (300.0, 200.0));

        let mid = zoom_at(&keyframes, 500.0).unwrap();
        assert!(mid.zoom > 1.0 && mid.zoom < 2.0);

        // Past the end holds the last keyframe.
        let late = zoom_at(&keyframes, 99_999.0).unwrap();
        assert_eq!(late.zoom, 2.0);
    }

    #[test]
    fn test_compile_zoom_empty_is_unit_constant() {
        let compiled = compile_zoom(&[]).unwrap();
        assert_eq!(compiled.zoom_expr, "1.00");
    }

    #[test]
    fn test_zoom_expression_ignores_intermediate_pulses() {
        // Regression pin: only first/last keyframes are honored by the
        // compiled expression; the 2.5x pulse in the middle must not appear.
        let keyframes = vec![
            ZoomKeyframe::rest(0.0, WIDTH, HEIGHT),
            ZoomKeyframe::new(2000.0, 300.0, 200.0, 2.5, EasingKind::EaseInOutCubic),
            ZoomKeyframe::new(3500.0, 300.0, 200.0, 2.5, EasingKind::Linear),
            ZoomKeyframe::rest(4100.0, WIDTH, HEIGHT),
        ];

        let compiled = compile_zoom(&keyframes).unwrap();
        assert!(
            !compiled.zoom_expr.contains("2.50"),
            "intermediate pulse leaked into {}",
            compiled.zoom_expr
        );
        assert_eq!(
            compiled.zoom_expr,
            "if(lt(t,4.1000),1.00+((t-0.0000)/4.1000)*(1.00-1.00),1.00)"
        );
    }

    #[test]
    fn test_unsorted_focus_points_rejected() {
        let trajectory = click_trajectory(vec![]);
        let points = [
            FocusPoint {
                x: 0.0,
                y: 0.0,
                time_ms: 5000.0,
                importance: 0.5,
                hold_duration_ms: None,
            },
            FocusPoint {
                x: 0.0,
                y: 0.0,
                time_ms: 1000.0,
                importance: 0.5,
                hold_duration_ms: None,
            },
        ];
        let result = generate_zoom_timeline(
            &settings(ZoomMode::FocusPoints),
            &trajectory,
            &points,
            WIDTH,
            HEIGHT,
        );
        assert!(result.is_err());
    }
}
