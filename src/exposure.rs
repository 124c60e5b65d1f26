//! Exposure model (pure).
//!
//! Turns [`Settings`] plus a catalog lighting condition into a shutter time:
//!
//! 1. `base = 1 / iso`
//! 2. `t = base * (f_stop / reference_f_stop)^2`
//! 3. reciprocity: `t = t^1.3` when enabled and `t > 1s`
//! 4. red filter: `t *= 8` when enabled
//! 5. bracketing: `t *= 2^bracket_stops`
//!
//! Nothing here validates inputs. A zero ISO or zero pinhole yields
//! non-finite values that end up in the formatted string as-is.

use crate::model::{LightingCondition, Settings, MAX_BRACKET_STOPS, MIN_BRACKET_STOPS};
use std::ops::RangeInclusive;

/// Exponent applied to exposures longer than one second when correcting for
/// reciprocity failure.
pub const RECIPROCITY_EXPONENT: f64 = 1.3;

/// Exposures at or below this many seconds are never reciprocity-corrected.
pub const RECIPROCITY_THRESHOLD_SECS: f64 = 1.0;

/// Fixed exposure multiplier for a red filter (three stops).
pub const RED_FILTER_FACTOR: f64 = 8.0;

/// Render with one decimal place.
///
/// Rounds the exact binary value, so 1.45 (stored just below) gives `1.4`.
/// An exact tie such as 2.25 goes to the neighbour with the larger magnitude.
pub fn to_fixed_1(value: f64) -> String {
    let magnitude = value.abs();
    // only multiples of 0.25 with an odd quarter count sit halfway between tenths
    let is_tie = (magnitude * 4.0).fract() == 0.0 && (magnitude * 2.0).fract() != 0.0;
    if !is_tie {
        return format!("{value:.1}");
    }
    let tenths = (magnitude * 10.0).ceil();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{:.1}", tenths / 10.0)
}

/// Aperture ratio `focal_length / pinhole_size`, limited to one decimal digit.
///
/// The value is parsed back from its one-decimal rendering, so everything
/// downstream sees exactly the number the user sees.
pub fn f_stop(settings: &Settings) -> f64 {
    to_fixed_1(settings.focal_length / settings.pinhole_size)
        .parse()
        .unwrap_or(f64::NAN)
}

/// Display form of the f-stop, e.g. `f/166.7`.
pub fn format_f_stop(settings: &Settings) -> String {
    format!("f/{}", to_fixed_1(f_stop(settings)))
}

/// Every intermediate value of the exposure computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureBreakdown {
    /// The condition the exposure is metered against.
    pub condition: &'static LightingCondition,
    /// The pinhole f-stop (one decimal digit).
    pub f_stop: f64,
    /// `1 / iso`.
    pub base: f64,
    /// After scaling from the reference aperture to the pinhole aperture.
    pub metered: f64,
    /// Whether the reciprocity exponent was applied.
    pub reciprocity_applied: bool,
    /// After reciprocity correction (equal to `metered` when not applied).
    pub corrected: f64,
    /// After the red filter factor (equal to `corrected` when off).
    pub filtered: f64,
    /// Final time after bracketing, in seconds.
    pub seconds: f64,
}

/// Run the full exposure pipeline.
///
/// Returns `None` when no condition is selected or the name is not in the
/// catalog.
pub fn exposure_breakdown(settings: &Settings) -> Option<ExposureBreakdown> {
    let condition = settings.condition()?;
    let f_stop = f_stop(settings);

    let base = 1.0 / f64::from(settings.iso);
    let metered = base * (f_stop / condition.f_stop).powi(2);

    let reciprocity_applied =
        settings.use_reciprocity_failure && metered > RECIPROCITY_THRESHOLD_SECS;
    let corrected = if reciprocity_applied {
        metered.powf(RECIPROCITY_EXPONENT)
    } else {
        metered
    };

    let filtered = if settings.use_red_filter {
        corrected * RED_FILTER_FACTOR
    } else {
        corrected
    };

    let seconds = filtered * 2f64.powf(settings.bracket_stops);

    Some(ExposureBreakdown {
        condition,
        f_stop,
        base,
        metered,
        reciprocity_applied,
        corrected,
        filtered,
        seconds,
    })
}

/// Final exposure time in seconds, if a condition is selected.
pub fn exposure_seconds(settings: &Settings) -> Option<f64> {
    exposure_breakdown(settings).map(|b| b.seconds)
}

/// Format a duration for display.
///
/// - under a second: reciprocal fraction, `1/250s`
/// - under a minute: one decimal, `2.3s`
/// - otherwise: minutes and whole seconds, `1m 15s`, or `2m` when the
///   seconds round to zero. A remainder that rounds up to 60 carries over.
pub fn format_exposure(seconds: f64) -> String {
    if seconds < 1.0 {
        return format!("1/{}s", (1.0 / seconds).round());
    }
    if seconds < 60.0 {
        return format!("{}s", to_fixed_1(seconds));
    }

    let mut minutes = (seconds / 60.0).floor();
    let mut remainder = (seconds % 60.0).round();
    if remainder >= 60.0 {
        minutes += 1.0;
        remainder = 0.0;
    }

    if remainder > 0.0 {
        format!("{minutes}m {remainder}s")
    } else {
        format!("{minutes}m")
    }
}

/// What every screen shows: the f-stop and, when metered, the shutter time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureReading {
    /// Pinhole f-stop, one decimal digit.
    pub f_stop: f64,
    /// `f/166.7`
    pub f_stop_label: String,
    /// Final exposure in seconds, `None` without a condition.
    pub seconds: Option<f64>,
    /// `seconds` as [`format_exposure`] renders it.
    pub exposure_label: Option<String>,
    /// The resolved lighting condition.
    pub condition: Option<&'static LightingCondition>,
}

/// Compute the f-stop and, when a condition resolves, the exposure.
pub fn exposure_reading(settings: &Settings) -> ExposureReading {
    let seconds = exposure_seconds(settings);
    ExposureReading {
        f_stop: f_stop(settings),
        f_stop_label: format_f_stop(settings),
        seconds,
        exposure_label: seconds.map(format_exposure),
        condition: settings.condition(),
    }
}

/// One row of a bracket series.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketStep {
    /// Offset in whole stops.
    pub stops: i32,
    /// Exposure at this offset, in seconds.
    pub seconds: f64,
    /// Formatted exposure.
    pub label: String,
}

/// Default span of a bracket series.
pub const DEFAULT_BRACKET_RANGE: RangeInclusive<i32> =
    (MIN_BRACKET_STOPS as i32)..=(MAX_BRACKET_STOPS as i32);

/// Exposure for each whole-stop offset in `stops`, all other settings fixed.
///
/// The current `bracket_stops` of `settings` is ignored; each step replaces it.
pub fn bracket_series(settings: &Settings, stops: RangeInclusive<i32>) -> Option<Vec<BracketStep>> {
    settings.condition()?;

    let steps = stops
        .filter_map(|stop| {
            let shifted = settings.clone().with_bracket_stops(f64::from(stop));
            exposure_seconds(&shifted).map(|seconds| BracketStep {
                stops: stop,
                seconds,
                label: format_exposure(seconds),
            })
        })
        .collect();
    Some(steps)
}
